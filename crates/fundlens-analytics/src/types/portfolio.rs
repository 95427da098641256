//! Portfolio reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Static reference data for a portfolio.
///
/// Mirrors the relational `portfolios` record: identity, inception year,
/// the capital the portfolio was seeded with, and its declared strategy.
/// Holdings and prices arrive separately as [`HoldingPriceRow`]s.
///
/// [`HoldingPriceRow`]: crate::types::HoldingPriceRow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique identifier for the portfolio.
    pub id: i64,

    /// Portfolio name.
    pub name: String,

    /// Year the portfolio was established.
    pub year_established: i32,

    /// Capital the portfolio was seeded with at inception.
    pub starting_capital: Decimal,

    /// Declared investment strategy (e.g. "Active", "Passive").
    pub strategy: String,
}

impl Portfolio {
    /// Creates a new portfolio record.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        year_established: i32,
        starting_capital: Decimal,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            year_established,
            starting_capital,
            strategy: strategy.into(),
        }
    }

    /// Validates that the portfolio can seed an accumulation pass.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NonPositiveStartingCapital` if the
    /// starting capital is zero or negative.
    pub fn validate_capital(&self) -> Result<(), ConfigurationError> {
        if self.starting_capital <= Decimal::ZERO {
            return Err(ConfigurationError::NonPositiveStartingCapital {
                portfolio_id: self.id,
                value: self.starting_capital,
            });
        }
        Ok(())
    }
}
