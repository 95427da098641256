//! Core data types for fund analytics.

mod portfolio;
mod row;
mod series;
mod stock;

pub use portfolio::Portfolio;
pub use row::HoldingPriceRow;
pub use series::{ValuationSeries, ValuationSnapshot};
pub use stock::{PricePoint, StockPriceEndpoints};
