//! # Fundlens Analytics
//!
//! AUM and performance analytics for equity fund portfolios.
//!
//! This crate computes portfolio valuation series and performance figures
//! from historical price and holdings data. The relational collaborator
//! supplies already-joined tabular rows; everything here is pure
//! computation producing the ordered (date, value) sequences that the
//! charting and report layers consume.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O or caching
//! - **Eager validation**: bad data fails fast with a specific error kind
//!   instead of propagating NaN or garbage values
//! - **Per-portfolio state**: each accumulation pass owns its cash balance
//!   and deployed set; nothing is shared across portfolios
//!
//! ## Features
//!
//! - **AUM Accumulation**: per-portfolio value series over weekly price
//!   history, tracking uninvested capital and first-observation deployment
//! - **Benchmark Series**: weekly-compounded comparison curves
//! - **Return Calculation**: annualized returns between value snapshots
//! - **Fund Aggregation**: fund-wide totals with mid-timeline capital
//!   injections and a running benchmark
//! - **Strategy Mix**: portfolio counts per declared strategy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fundlens_analytics::prelude::*;
//!
//! let series = accumulate(&portfolio, &rows)?;
//! let bench = benchmark_values(portfolio.starting_capital, 0.08, series.len())?;
//! let fund = aggregate_fund(&portfolios, &all_series, &dates, 0.08);
//! ```
//!
//! ## Module Overview
//!
//! - [`accumulator`] - The AUM accumulation pass
//! - [`benchmark`] - Weekly-compounded growth series
//! - [`returns`] - Annualized return calculations
//! - [`fund`] - Fund-wide aggregation with capital injections
//! - [`strategy`] - Strategy mix breakdown
//! - [`types`] - Core data types (Portfolio, rows, snapshots)
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-based fan-out of accumulation passes across
//!   portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod accumulator;
pub mod benchmark;
pub mod error;
pub mod fund;
pub mod parallel;
pub mod returns;
pub mod strategy;
pub mod types;

// Re-export error types at crate root
pub use error::{
    AnalyticsError, AnalyticsResult, ComputationError, ConfigurationError, DataIntegrityError,
};

// Re-export main types
pub use types::{
    HoldingPriceRow, Portfolio, PricePoint, StockPriceEndpoints, ValuationSeries,
    ValuationSnapshot,
};

// Re-export analytics functions and result types
pub use accumulator::{accumulate, accumulate_over};
pub use benchmark::{benchmark_values, growth_factors, weekly_growth_factor, WEEKS_PER_YEAR};
pub use fund::{aggregate_fund, FundSeries};
pub use parallel::accumulate_portfolios;
pub use returns::{annualized_return, average_return, stock_returns, StockReturn};
pub use strategy::{strategy_counts, StrategyCount};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fundlens_analytics::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{
        AnalyticsError, AnalyticsResult, ComputationError, ConfigurationError, DataIntegrityError,
    };

    // Data types
    pub use crate::types::{
        HoldingPriceRow, Portfolio, PricePoint, StockPriceEndpoints, ValuationSeries,
        ValuationSnapshot,
    };

    // Accumulation
    pub use crate::accumulator::{accumulate, accumulate_over};

    // Benchmark series
    pub use crate::benchmark::{
        benchmark_values, growth_factors, weekly_growth_factor, WEEKS_PER_YEAR,
    };

    // Returns
    pub use crate::returns::{annualized_return, average_return, stock_returns, StockReturn};

    // Fund aggregation
    pub use crate::fund::{aggregate_fund, FundSeries};

    // Strategy mix
    pub use crate::strategy::{strategy_counts, StrategyCount};

    // Parallel fan-out
    pub use crate::parallel::accumulate_portfolios;

    // Re-export commonly used types from dependencies
    pub use fundlens_core::{Date, Weekday};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = AnalyticsError::from(ComputationError::ZeroElapsedDays);
        assert!(err.to_string().contains("zero elapsed days"));
    }
}
