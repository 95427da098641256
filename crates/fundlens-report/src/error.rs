//! Error types for report assembly.

use fundlens_analytics::AnalyticsError;
use fundlens_core::CoreError;
use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while assembling report datasets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A data file could not be opened or read.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// The file that failed.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// A record in a data file could not be parsed.
    #[error("malformed record in {path}: {message}")]
    Parse {
        /// The file containing the record.
        path: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A date calculation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An analytics computation failed.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// The requested portfolio is not present in the data source.
    #[error("portfolio {portfolio_id} not found in data source")]
    UnknownPortfolio {
        /// The missing portfolio id.
        portfolio_id: i64,
    },
}

impl ReportError {
    /// Create an I/O error for a file.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error for a file.
    #[must_use]
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
