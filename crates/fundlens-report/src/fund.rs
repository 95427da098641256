//! The fund-wide AUM report.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fundlens_analytics::{accumulate, aggregate_fund, FundSeries, HoldingPriceRow, Portfolio};

use crate::config::ReportConfig;
use crate::error::ReportResult;

/// The fund AUM line with its benchmark, plus the portfolios whose
/// accumulation pass failed and were excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundReport {
    /// Aggregated fund series (dates, values, benchmark).
    pub series: FundSeries,

    /// Annual benchmark rate the comparison uses.
    pub benchmark_rate: f64,

    /// Portfolios excluded because their pass failed.
    pub skipped_portfolios: Vec<i64>,
}

/// Builds the fund-wide report.
///
/// Derives the weekly schedule from the earliest establishment year among
/// the portfolios (falling back to the configured first year when there
/// are none), runs every portfolio's accumulation pass, and aggregates the
/// survivors. A portfolio whose pass fails is logged and skipped; one bad
/// portfolio never aborts the fund-wide walk.
///
/// # Errors
///
/// Returns a `CoreError` only if the schedule's first year is out of
/// calendar range.
pub fn build_fund_report(
    portfolios: &[Portfolio],
    rows: &[HoldingPriceRow],
    config: &ReportConfig,
) -> ReportResult<FundReport> {
    let first_year = portfolios
        .iter()
        .map(|p| p.year_established)
        .min()
        .unwrap_or(config.fund_first_year);
    let dates = config.fund_dates(first_year)?;

    let mut rows_by_portfolio: HashMap<i64, Vec<HoldingPriceRow>> = HashMap::new();
    for row in rows {
        rows_by_portfolio
            .entry(row.portfolio_id)
            .or_default()
            .push(row.clone());
    }

    let mut series = Vec::with_capacity(portfolios.len());
    let mut skipped_portfolios = Vec::new();

    for portfolio in portfolios {
        let portfolio_rows = rows_by_portfolio
            .remove(&portfolio.id)
            .unwrap_or_default();

        match accumulate(portfolio, &portfolio_rows) {
            Ok(valuation) => series.push(valuation),
            Err(error) => {
                tracing::warn!(
                    portfolio_id = portfolio.id,
                    error = %error,
                    "AUM pass failed; excluding portfolio from fund aggregation"
                );
                skipped_portfolios.push(portfolio.id);
            }
        }
    }

    let fund = aggregate_fund(portfolios, &series, &dates, config.benchmark_rate);

    Ok(FundReport {
        series: fund,
        benchmark_rate: config.benchmark_rate,
        skipped_portfolios,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlens_core::Date;
    use rust_decimal_macros::dec;

    fn row(portfolio_id: i64, stock_id: i64, price: rust_decimal::Decimal, date: Date) -> HoldingPriceRow {
        HoldingPriceRow {
            portfolio_id,
            stock_id,
            shares_purchased: dec!(1000),
            purchase_date: Date::from_ymd(2023, 1, 6).unwrap(),
            price,
            price_date: date,
        }
    }

    #[test]
    fn test_failed_pass_is_skipped_not_fatal() {
        let d0 = Date::from_ymd(2023, 1, 6).unwrap();
        let portfolios = vec![
            Portfolio::new(1, "Alpha", 2023, dec!(1_000_000), "Active"),
            // No holdings at all: this pass fails and is skipped.
            Portfolio::new(2, "Beta", 2023, dec!(500_000), "Passive"),
        ];
        let rows = vec![row(1, 10, dec!(100), d0)];

        let config = ReportConfig::default().with_terminal_date(d0.add_days(14));
        let report = build_fund_report(&portfolios, &rows, &config).unwrap();

        assert_eq!(report.skipped_portfolios, vec![2]);
        // Alpha's value plus its injected capital, nothing from Beta.
        assert_eq!(report.series.values[0], dec!(2_000_000.00));
    }

    #[test]
    fn test_schedule_derived_from_earliest_portfolio() {
        let d0 = Date::from_ymd(2022, 1, 7).unwrap();
        let portfolios = vec![Portfolio::new(1, "Alpha", 2022, dec!(1_000_000), "Active")];
        let rows = vec![row(1, 10, dec!(100), d0)];

        let config = ReportConfig::default().with_terminal_date(d0.add_days(21));
        let report = build_fund_report(&portfolios, &rows, &config).unwrap();

        // First Friday of 2022, not of the configured fallback year.
        assert_eq!(report.series.dates[0], d0);
        assert_eq!(report.series.len(), 3);
    }
}
