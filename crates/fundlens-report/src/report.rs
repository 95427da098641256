//! The assembled report datasets for one run.

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::fund::{build_fund_report, FundReport};
use crate::single_portfolio::{build_single_portfolio_report, SinglePortfolioReport};
use crate::source::ReportDataSource;
use crate::stock_returns::{build_stock_returns_report, StockReturnsReport};
use crate::strategy_mix::{build_strategy_mix_report, StrategyMixReport};

/// The four datasets behind one report run, ready for the charting and
/// slide layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// The featured portfolio's AUM report.
    pub single_portfolio: SinglePortfolioReport,

    /// The fund-wide AUM report.
    pub fund: FundReport,

    /// The all-stock returns report.
    pub stock_returns: StockReturnsReport,

    /// The strategy comparison report.
    pub strategy_mix: StrategyMixReport,
}

impl ReportData {
    /// Loads the exported views from `source` and assembles all four
    /// report datasets in one sequential pass.
    ///
    /// # Errors
    ///
    /// Fails if a view cannot be read, the featured portfolio is missing,
    /// or one of the builders fails; see the individual `build_*`
    /// functions. Failures of individual portfolios inside the fund
    /// aggregation are skipped, not propagated.
    pub fn load<S: ReportDataSource>(source: &S, config: &ReportConfig) -> ReportResult<Self> {
        let portfolios = source.portfolios()?;
        let rows = source.holdings_with_prices()?;
        let endpoints = source.stock_price_endpoints()?;

        tracing::info!(
            portfolios = portfolios.len(),
            rows = rows.len(),
            stocks = endpoints.len(),
            "loaded report views"
        );

        let featured = portfolios
            .iter()
            .find(|p| p.id == config.featured_portfolio_id)
            .ok_or(ReportError::UnknownPortfolio {
                portfolio_id: config.featured_portfolio_id,
            })?;
        let featured_rows: Vec<_> = rows
            .iter()
            .filter(|row| row.portfolio_id == featured.id)
            .cloned()
            .collect();

        let single_portfolio = build_single_portfolio_report(featured, &featured_rows, config)?;
        let fund = build_fund_report(&portfolios, &rows, config)?;
        let stock_returns = build_stock_returns_report(&endpoints)?;
        let strategy_mix = build_strategy_mix_report(&portfolios);

        Ok(Self {
            single_portfolio,
            fund,
            stock_returns,
            strategy_mix,
        })
    }
}
