//! The all-stock returns report.

use serde::{Deserialize, Serialize};

use fundlens_analytics::{average_return, stock_returns, StockPriceEndpoints, StockReturn};

use crate::error::ReportResult;

/// Annualized return per stock (against its IPO date) with the
/// cross-sectional average line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReturnsReport {
    /// Per-stock annualized returns, in input order.
    pub returns: Vec<StockReturn>,

    /// Average annualized return across all stocks, in percent.
    pub average_pct: Option<f64>,
}

/// Builds the all-stock returns report from first/last price endpoints.
///
/// # Errors
///
/// Propagates annualization failures; see
/// [`fundlens_analytics::stock_returns`].
pub fn build_stock_returns_report(
    endpoints: &[StockPriceEndpoints],
) -> ReportResult<StockReturnsReport> {
    let returns = stock_returns(endpoints)?;
    let average_pct = average_return(&returns);

    Ok(StockReturnsReport {
        returns,
        average_pct,
    })
}
