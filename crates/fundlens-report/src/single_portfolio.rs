//! The single-portfolio AUM report.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundlens_analytics::{
    accumulate, annualized_return, benchmark_values, AnalyticsError, HoldingPriceRow, Portfolio,
    PricePoint, ValuationSeries,
};

use crate::config::ReportConfig;
use crate::error::ReportResult;

/// Everything the single-portfolio slides need: the AUM line with its
/// benchmark, the current-value comparison, and the headline stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePortfolioReport {
    /// Portfolio identifier.
    pub portfolio_id: i64,

    /// Portfolio name.
    pub name: String,

    /// Year the portfolio was established.
    pub year_established: i32,

    /// Capital the portfolio was seeded with.
    pub starting_capital: Decimal,

    /// Number of distinct stocks held.
    pub stocks_held: usize,

    /// Annual benchmark rate the comparison uses.
    pub benchmark_rate: f64,

    /// The portfolio's AUM series, one snapshot per valuation week.
    pub aum: ValuationSeries,

    /// Benchmark values aligned positionally with the AUM snapshots.
    pub benchmark: Vec<f64>,

    /// Annualized return between the first and last snapshot, in percent.
    pub annualized_return_pct: f64,
}

/// Builds the single-portfolio report.
///
/// Runs the portfolio's accumulation pass, scales the benchmark curve off
/// its starting capital, and annualizes the value change between the first
/// and last snapshot.
///
/// # Errors
///
/// Propagates accumulation and annualization failures; see
/// [`fundlens_analytics::accumulate`] and
/// [`fundlens_analytics::annualized_return`].
pub fn build_single_portfolio_report(
    portfolio: &Portfolio,
    rows: &[HoldingPriceRow],
    config: &ReportConfig,
) -> ReportResult<SinglePortfolioReport> {
    let aum = accumulate(portfolio, rows)?;
    let benchmark = benchmark_values(portfolio.starting_capital, config.benchmark_rate, aum.len())
        .map_err(AnalyticsError::from)?;

    // accumulate rejects empty row sets, so both endpoints exist.
    let first = aum.first().expect("non-empty series").to_owned();
    let last = aum.last().expect("non-empty series").to_owned();
    let annualized_return_pct = annualized_return(
        &PricePoint::new(first.date, first.value),
        &PricePoint::new(last.date, last.value),
    )?;

    let stocks_held = rows
        .iter()
        .map(|row| row.stock_id)
        .collect::<HashSet<_>>()
        .len();

    Ok(SinglePortfolioReport {
        portfolio_id: portfolio.id,
        name: portfolio.name.clone(),
        year_established: portfolio.year_established,
        starting_capital: portfolio.starting_capital,
        stocks_held,
        benchmark_rate: config.benchmark_rate,
        aum,
        benchmark,
        annualized_return_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlens_core::Date;
    use rust_decimal_macros::dec;

    fn rows() -> Vec<HoldingPriceRow> {
        let d0 = Date::from_ymd(2023, 1, 6).unwrap();
        let d1 = d0.add_days(7);
        vec![
            HoldingPriceRow {
                portfolio_id: 1,
                stock_id: 10,
                shares_purchased: dec!(1000),
                purchase_date: d0,
                price: dec!(100),
                price_date: d0,
            },
            HoldingPriceRow {
                portfolio_id: 1,
                stock_id: 10,
                shares_purchased: dec!(1000),
                purchase_date: d0,
                price: dec!(110),
                price_date: d1,
            },
        ]
    }

    #[test]
    fn test_report_contents() {
        let portfolio = Portfolio::new(1, "Alpha", 2023, dec!(1_000_000), "Active");
        let report =
            build_single_portfolio_report(&portfolio, &rows(), &ReportConfig::default()).unwrap();

        assert_eq!(report.portfolio_id, 1);
        assert_eq!(report.name, "Alpha");
        assert_eq!(report.stocks_held, 1);
        assert_eq!(report.aum.len(), 2);
        assert_eq!(report.benchmark.len(), 2);
        assert_eq!(report.aum.last().unwrap().value, dec!(1_010_000.00));
        // 1% in a week annualizes to a large positive figure.
        assert!(report.annualized_return_pct > 0.0);
    }

    #[test]
    fn test_empty_rows_fail() {
        let portfolio = Portfolio::new(1, "Alpha", 2023, dec!(1_000_000), "Active");
        assert!(build_single_portfolio_report(&portfolio, &[], &ReportConfig::default()).is_err());
    }
}
