//! Benchmark growth series.
//!
//! The comparison curve for a portfolio compounds a fixed annual rate at
//! weekly periods. Growth factors are pure multiplicative state relative
//! to period zero; the whole-fund benchmark with capital injections lives
//! in [`crate::fund`] because it depends on the aggregation walk.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::ComputationError;

/// Weekly compounding periods per year.
pub const WEEKS_PER_YEAR: u32 = 52;

/// The weekly growth multiplier for an annual rate.
///
/// `(1 + r)^(1/52)`, so that 52 weekly periods compound to one year of
/// growth at `r`.
#[must_use]
pub fn weekly_growth_factor(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / f64::from(WEEKS_PER_YEAR))
}

/// Cumulative growth factors for `periods` weekly periods.
///
/// Returns `[(1 + w)^1, (1 + w)^2, ..., (1 + w)^n]` where `1 + w` is the
/// weekly growth multiplier: factor `i` is the growth relative to period
/// zero after `i` weeks. Pure function, no state.
///
/// # Errors
///
/// Returns `ComputationError::ZeroPeriods` when `periods` is zero.
pub fn growth_factors(annual_rate: f64, periods: usize) -> Result<Vec<f64>, ComputationError> {
    if periods == 0 {
        return Err(ComputationError::ZeroPeriods);
    }

    let weekly = weekly_growth_factor(annual_rate);
    Ok((1..=periods).map(|i| weekly.powi(i as i32)).collect())
}

/// Benchmark values for a fixed principal over `periods` weekly periods.
///
/// Scales each growth factor by the starting capital, producing the
/// hypothetical value series the portfolio is compared against. The caller
/// aligns these positionally with the portfolio's valuation dates.
///
/// # Errors
///
/// Returns `ComputationError::ZeroPeriods` when `periods` is zero.
pub fn benchmark_values(
    starting_capital: Decimal,
    annual_rate: f64,
    periods: usize,
) -> Result<Vec<f64>, ComputationError> {
    // Lossy conversion is fine here: the benchmark is a comparison curve,
    // not money accounting, and fund capital is well inside f64 range.
    let principal = starting_capital.to_f64().unwrap_or(0.0);

    let values = growth_factors(annual_rate, periods)?
        .into_iter()
        .map(|factor| principal * factor)
        .collect();

    Ok(values)
}
