//! Annualized return calculations.

use fundlens_core::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsResult, ComputationError};
use crate::types::{PricePoint, StockPriceEndpoints};

/// Day-count basis for annualization.
const DAYS_PER_YEAR: f64 = 365.0;

/// Annualized return of one stock over its observed price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReturn {
    /// Exchange ticker.
    pub ticker: String,

    /// Date the stock listed.
    pub ipo_date: Date,

    /// Annualized return in percent, rounded to two decimal places.
    pub annualized_return_pct: f64,
}

/// Annualized return between two value snapshots, in percent.
///
/// `((last / first)^(365 / elapsed_days) - 1) * 100`, rounded to two
/// decimal places. Works for any pair of dated values: stock prices or
/// portfolio valuation snapshots.
///
/// # Errors
///
/// - `ComputationError::NonPositiveQuote` when either value is zero or
///   negative.
/// - `ComputationError::ZeroElapsedDays` when both snapshots share a date
///   (the exponent would divide by zero).
///
/// # Example
///
/// ```rust
/// use fundlens_analytics::prelude::*;
///
/// let first = PricePoint::new(Date::from_ymd(2020, 1, 1)?, dec!(50));
/// let last = PricePoint::new(Date::from_ymd(2024, 1, 1)?, dec!(100));
/// let pct = annualized_return(&first, &last)?;
/// assert!((pct - 18.91).abs() < 0.01);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn annualized_return(first: &PricePoint, last: &PricePoint) -> AnalyticsResult<f64> {
    for point in [first, last] {
        if point.price <= Decimal::ZERO {
            return Err(ComputationError::NonPositiveQuote { value: point.price }.into());
        }
    }

    let elapsed_days = first.date.days_between(&last.date);
    if elapsed_days == 0 {
        return Err(ComputationError::ZeroElapsedDays.into());
    }

    let ratio = (last.price / first.price).to_f64().unwrap_or(0.0);
    let years = elapsed_days as f64 / DAYS_PER_YEAR;
    let pct = (ratio.powf(1.0 / years) - 1.0) * 100.0;

    Ok(round_pct(pct))
}

/// Annualized returns for every stock's first/last price endpoints.
///
/// Preserves the input order.
///
/// # Errors
///
/// Fails on the first stock whose endpoints cannot be annualized; see
/// [`annualized_return`].
pub fn stock_returns(endpoints: &[StockPriceEndpoints]) -> AnalyticsResult<Vec<StockReturn>> {
    endpoints
        .iter()
        .map(|stock| {
            let pct = annualized_return(&stock.first, &stock.last)?;
            Ok(StockReturn {
                ticker: stock.ticker.clone(),
                ipo_date: stock.ipo_date,
                annualized_return_pct: pct,
            })
        })
        .collect()
}

/// Cross-sectional mean of annualized returns, in percent.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn average_return(returns: &[StockReturn]) -> Option<f64> {
    if returns.is_empty() {
        return None;
    }

    let sum: f64 = returns.iter().map(|r| r.annualized_return_pct).sum();
    Some(sum / returns.len() as f64)
}

/// Rounds a percentage to two decimal places.
fn round_pct(pct: f64) -> f64 {
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn point(year: i32, month: u32, day: u32, price: Decimal) -> PricePoint {
        PricePoint::new(Date::from_ymd(year, month, day).unwrap(), price)
    }

    #[test]
    fn test_doubling_over_four_years() {
        // 1461 days including one leap year; annualized just under 19%.
        let first = point(2020, 1, 1, dec!(50));
        let last = point(2024, 1, 1, dec!(100));
        let pct = annualized_return(&first, &last).unwrap();
        assert_relative_eq!(pct, 18.91, epsilon = 0.01);
    }

    #[test]
    fn test_exact_one_year() {
        let first = point(2023, 1, 1, dec!(100));
        let last = point(2024, 1, 1, dec!(110));
        let pct = annualized_return(&first, &last).unwrap();
        assert_relative_eq!(pct, 10.0, epsilon = 0.01);
    }

    #[test]
    fn test_negative_return() {
        let first = point(2023, 1, 1, dec!(100));
        let last = point(2024, 1, 1, dec!(90));
        let pct = annualized_return(&first, &last).unwrap();
        assert!(pct < 0.0);
        assert_relative_eq!(pct, -10.0, epsilon = 0.01);
    }

    #[test]
    fn test_zero_elapsed_days_rejected() {
        let first = point(2024, 1, 1, dec!(100));
        let last = point(2024, 1, 1, dec!(110));
        let err = annualized_return(&first, &last).unwrap_err();
        assert!(err.is_computation());
    }

    #[test]
    fn test_non_positive_quote_rejected() {
        let first = point(2023, 1, 1, Decimal::ZERO);
        let last = point(2024, 1, 1, dec!(110));
        assert!(annualized_return(&first, &last).is_err());

        let first = point(2023, 1, 1, dec!(100));
        let last = point(2024, 1, 1, dec!(-3));
        assert!(annualized_return(&first, &last).is_err());
    }

    #[test]
    fn test_stock_returns_preserve_order() {
        let endpoints = vec![
            StockPriceEndpoints {
                stock_id: 1,
                ticker: "AAAA".into(),
                ipo_date: Date::from_ymd(2019, 6, 3).unwrap(),
                first: point(2020, 1, 3, dec!(50)),
                last: point(2024, 1, 3, dec!(100)),
            },
            StockPriceEndpoints {
                stock_id: 2,
                ticker: "BBBB".into(),
                ipo_date: Date::from_ymd(2021, 2, 1).unwrap(),
                first: point(2021, 2, 5, dec!(20)),
                last: point(2024, 2, 5, dec!(18)),
            },
        ];

        let returns = stock_returns(&endpoints).unwrap();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].ticker, "AAAA");
        assert_eq!(returns[1].ticker, "BBBB");
        assert!(returns[0].annualized_return_pct > 0.0);
        assert!(returns[1].annualized_return_pct < 0.0);
    }

    #[test]
    fn test_average_return() {
        let make = |pct: f64| StockReturn {
            ticker: "T".into(),
            ipo_date: Date::from_ymd(2020, 1, 1).unwrap(),
            annualized_return_pct: pct,
        };

        assert_eq!(average_return(&[]), None);
        let avg = average_return(&[make(10.0), make(-4.0), make(6.0)]).unwrap();
        assert_relative_eq!(avg, 4.0, epsilon = 1e-12);
    }
}
