//! # Fundlens Core
//!
//! Foundation types for the Fundlens fund analytics stack.
//!
//! This crate provides the calendar [`types::Date`] type used throughout the
//! workspace, including the weekly-cadence helpers that fund valuation
//! schedules are built from, and the core error type.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Weekday;
//! use fundlens_core::Date;
//!
//! // Fund valuation weeks are anchored on Fridays.
//! let inception = Date::first_weekday_of_year(1991, Weekday::Fri)?;
//! let terminal = Date::from_ymd(1991, 3, 1)?;
//! let schedule = inception.weekly_through(terminal);
//! assert_eq!(schedule[0], inception);
//! # Ok::<(), fundlens_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod types;

// Re-export main types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;

// Re-export the weekday enum used by the schedule helpers
pub use chrono::Weekday;
