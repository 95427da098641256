//! Error types for fund analytics.
//!
//! The taxonomy separates bad upstream data (`DataIntegrityError`), math
//! that cannot be performed (`ComputationError`), and unusable portfolio
//! configuration (`ConfigurationError`). All validation is eager: a
//! calculation fails with a specific error kind rather than propagating
//! NaN or garbage values.

use fundlens_core::Date;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// A price or holding row that violates the upstream join contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// A price observation predates the stock's purchase event.
    #[error("stock {stock_id}: price observed {price_date} before purchase on {purchase_date}")]
    PriceBeforePurchase {
        /// The stock whose row is inconsistent.
        stock_id: i64,
        /// The offending observation date.
        price_date: Date,
        /// The recorded purchase date.
        purchase_date: Date,
    },

    /// A stock appears with a zero or negative price.
    #[error("stock {stock_id}: non-positive price {price} on {date}")]
    NonPositivePrice {
        /// The stock whose price is invalid.
        stock_id: i64,
        /// The observation date.
        date: Date,
        /// The invalid price.
        price: Decimal,
    },
}

/// A calculation that cannot be performed on the given inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// Annualization over zero elapsed days (division by zero).
    #[error("cannot annualize over zero elapsed days")]
    ZeroElapsedDays,

    /// A benchmark series of zero periods was requested.
    #[error("benchmark series requires at least one period")]
    ZeroPeriods,

    /// Annualization over a non-positive value snapshot.
    #[error("cannot annualize over non-positive value {value}")]
    NonPositiveQuote {
        /// The invalid value.
        value: Decimal,
    },
}

/// A portfolio whose reference data makes the computation meaningless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Starting capital must be positive.
    #[error("portfolio {portfolio_id}: non-positive starting capital {value}")]
    NonPositiveStartingCapital {
        /// The portfolio with invalid capital.
        portfolio_id: i64,
        /// The invalid capital amount.
        value: Decimal,
    },

    /// The portfolio has no holding rows to derive valuation dates from.
    #[error("portfolio {portfolio_id}: no holdings")]
    EmptyHoldings {
        /// The portfolio with no holdings.
        portfolio_id: i64,
    },
}

/// Errors that can occur during analytics operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// Upstream data violated the join contract.
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    /// A calculation could not be performed.
    #[error(transparent)]
    Computation(#[from] ComputationError),

    /// Portfolio reference data is unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl AnalyticsError {
    /// Returns true if this is a data integrity error.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity(_))
    }

    /// Returns true if this is a computation error.
    #[must_use]
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
