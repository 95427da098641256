//! # Fundlens Report
//!
//! Report dataset assembly for the Fundlens analytics stack.
//!
//! One report run is a single sequential pass: load the three exported
//! relational views, run the per-portfolio and fund-wide analytics, and
//! assemble the date/value tables the charting and slide layers consume.
//! Rendering and layout live downstream of this crate.
//!
//! A portfolio whose accumulation pass fails is logged and excluded from
//! the fund-wide aggregation rather than aborting the run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fundlens_report::{CsvReportSource, ReportConfig, ReportData};
//!
//! let source = CsvReportSource::new("./report-data");
//! let config = ReportConfig::default();
//! let data = ReportData::load(&source, &config)?;
//! println!("fund weeks: {}", data.fund.series.len());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod config;
pub mod error;
pub mod fund;
pub mod report;
pub mod single_portfolio;
pub mod source;
pub mod stock_returns;
pub mod strategy_mix;

// Re-export error types at crate root
pub use error::{ReportError, ReportResult};

// Re-export main types and builders
pub use config::ReportConfig;
pub use fund::{build_fund_report, FundReport};
pub use report::ReportData;
pub use single_portfolio::{build_single_portfolio_report, SinglePortfolioReport};
pub use source::{CsvReportSource, ReportDataSource};
pub use stock_returns::{build_stock_returns_report, StockReturnsReport};
pub use strategy_mix::{build_strategy_mix_report, StrategyMixReport};
