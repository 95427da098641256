//! Report data sources.
//!
//! The relational layer exports three views: portfolio reference data,
//! holdings joined against weekly price history, and per-stock first/last
//! price endpoints. [`ReportDataSource`] is the boundary the report
//! builders consume them through; [`CsvReportSource`] reads the views from
//! exported CSV files.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use fundlens_analytics::{HoldingPriceRow, Portfolio, PricePoint, StockPriceEndpoints};
use fundlens_core::Date;
use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};

/// Supplies the three exported relational views for one report run.
pub trait ReportDataSource {
    /// Portfolio reference data.
    fn portfolios(&self) -> ReportResult<Vec<Portfolio>>;

    /// All holdings-with-prices rows across the fund.
    fn holdings_with_prices(&self) -> ReportResult<Vec<HoldingPriceRow>>;

    /// Per-stock first/last price endpoints with ticker and IPO date.
    fn stock_price_endpoints(&self) -> ReportResult<Vec<StockPriceEndpoints>>;
}

// =============================================================================
// CSV SOURCE
// =============================================================================

/// File name of the portfolios view.
const PORTFOLIOS_FILE: &str = "portfolios.csv";

/// File name of the holdings-with-prices view.
const HOLDINGS_FILE: &str = "holdings_with_prices.csv";

/// File name of the stock price endpoints view.
const STOCK_ENDPOINTS_FILE: &str = "stock_price_endpoints.csv";

/// CSV record for the stock price endpoints view.
#[derive(Debug, Deserialize)]
struct EndpointRecord {
    stock_id: i64,
    ticker: String,
    ipo_date: Date,
    first_date: Date,
    first_price: Decimal,
    last_date: Date,
    last_price: Decimal,
}

impl From<EndpointRecord> for StockPriceEndpoints {
    fn from(record: EndpointRecord) -> Self {
        Self {
            stock_id: record.stock_id,
            ticker: record.ticker,
            ipo_date: record.ipo_date,
            first: PricePoint::new(record.first_date, record.first_price),
            last: PricePoint::new(record.last_date, record.last_price),
        }
    }
}

/// CSV-based report source reading the exported views from a directory.
///
/// Expects `portfolios.csv`, `holdings_with_prices.csv`, and
/// `stock_price_endpoints.csv` with ISO 8601 dates. Each call re-reads the
/// file; a report run is one sequential pass, so nothing is cached.
#[derive(Debug, Clone)]
pub struct CsvReportSource {
    directory: PathBuf,
}

impl CsvReportSource {
    /// Creates a source reading from `directory`.
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Reads and deserializes every record of one view.
    fn read_view<T: DeserializeOwned>(&self, file_name: &str) -> ReportResult<Vec<T>> {
        let path = self.directory.join(file_name);
        let display = path.display().to_string();

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| ReportError::io(&display, e.to_string()))?;

        reader
            .deserialize()
            .map(|record| record.map_err(|e| ReportError::parse(&display, e.to_string())))
            .collect()
    }
}

impl ReportDataSource for CsvReportSource {
    fn portfolios(&self) -> ReportResult<Vec<Portfolio>> {
        self.read_view(PORTFOLIOS_FILE)
    }

    fn holdings_with_prices(&self) -> ReportResult<Vec<HoldingPriceRow>> {
        self.read_view(HOLDINGS_FILE)
    }

    fn stock_price_endpoints(&self) -> ReportResult<Vec<StockPriceEndpoints>> {
        let records: Vec<EndpointRecord> = self.read_view(STOCK_ENDPOINTS_FILE)?;
        Ok(records.into_iter().map(StockPriceEndpoints::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvReportSource::new("/nonexistent/report-data");
        let err = source.portfolios().unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
