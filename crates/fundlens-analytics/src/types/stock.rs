//! Per-stock price endpoints for return calculations.

use fundlens_core::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated price (or value) observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,

    /// Observed price or value.
    pub price: Decimal,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: Date, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// The first and last price observations of one stock.
///
/// The relational collaborator supplies one record per listed stock:
/// its ticker, IPO date, earliest priced observation, and the observation
/// at the end of the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPriceEndpoints {
    /// Unique stock identifier.
    pub stock_id: i64,

    /// Exchange ticker.
    pub ticker: String,

    /// Date the stock listed.
    pub ipo_date: Date,

    /// Earliest price observation.
    pub first: PricePoint,

    /// Latest price observation in the reporting window.
    pub last: PricePoint,
}
