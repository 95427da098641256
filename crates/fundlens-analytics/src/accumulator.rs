//! The AUM accumulation pass.
//!
//! Walks a portfolio's holdings-with-prices rows in ascending valuation-date
//! order and produces one total-value snapshot per date. Each pass owns two
//! pieces of running state, scoped to one portfolio and discarded afterward:
//!
//! - the uninvested cash balance, seeded with the starting capital;
//! - the set of stocks whose purchase cost has already left the cash bucket.
//!
//! Capital leaves the cash bucket the first time a priced row is observed
//! for a stock, and never again for that stock within the pass. The first
//! priced observation counts as the purchase-realization date even when the
//! recorded purchase date precedes it; downstream report numbers depend on
//! this accounting, so it must not be "corrected" to true purchase-date
//! accounting.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use fundlens_core::Date;

use crate::error::{AnalyticsResult, ConfigurationError};
use crate::types::{HoldingPriceRow, Portfolio, ValuationSeries, ValuationSnapshot};

/// Decimal places of emitted snapshot values.
const VALUE_DP: u32 = 2;

/// Running state of one accumulation pass.
///
/// Owned exclusively by the pass for one portfolio; nothing is shared
/// across portfolios.
struct AccumulationPass {
    uninvested: Decimal,
    deployed: HashSet<i64>,
}

impl AccumulationPass {
    fn new(starting_capital: Decimal) -> Self {
        Self {
            uninvested: starting_capital,
            deployed: HashSet::new(),
        }
    }

    /// Values one date group and advances the pass state.
    fn value_date(&mut self, date: Date, rows: &[&HoldingPriceRow]) -> ValuationSnapshot {
        let mut total = Decimal::ZERO;

        for row in rows {
            let value = row.market_value();

            // Purchase cost leaves the cash bucket exactly once per stock.
            if self.deployed.insert(row.stock_id) {
                self.uninvested -= value;
            }

            total += value;
        }

        total += self.uninvested;
        ValuationSnapshot::new(date, total.round_dp(VALUE_DP))
    }
}

/// Computes a portfolio's value series from its holdings-with-prices rows.
///
/// Emits one snapshot per distinct price date, in ascending date order.
/// Each snapshot is the market value of all positions priced on that date
/// plus the remaining uninvested cash, rounded to two decimal places.
///
/// # Errors
///
/// - `ConfigurationError::NonPositiveStartingCapital` when the portfolio's
///   starting capital is zero or negative.
/// - `ConfigurationError::EmptyHoldings` when `rows` is empty; with no rows
///   there are no valuation dates to derive. Use [`accumulate_over`] to
///   value a holdings-free portfolio against an explicit schedule.
/// - `DataIntegrityError` when any row has a non-positive price or a price
///   observation before its purchase date.
///
/// # Example
///
/// ```rust
/// use fundlens_analytics::prelude::*;
///
/// let portfolio = Portfolio::new(1, "Alpha", 2020, dec!(1_000_000), "Active");
/// let d0 = Date::from_ymd(2020, 1, 3)?;
/// let rows = vec![HoldingPriceRow {
///     portfolio_id: 1,
///     stock_id: 10,
///     shares_purchased: dec!(1000),
///     purchase_date: d0,
///     price: dec!(100),
///     price_date: d0,
/// }];
///
/// let series = accumulate(&portfolio, &rows)?;
/// assert_eq!(series.value_on(d0), Some(dec!(1_000_000.00)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn accumulate(portfolio: &Portfolio, rows: &[HoldingPriceRow]) -> AnalyticsResult<ValuationSeries> {
    portfolio.validate_capital()?;

    if rows.is_empty() {
        return Err(ConfigurationError::EmptyHoldings {
            portfolio_id: portfolio.id,
        }
        .into());
    }

    let groups = group_by_date(rows)?;
    let mut pass = AccumulationPass::new(portfolio.starting_capital);

    let snapshots = groups
        .iter()
        .map(|(&date, rows)| pass.value_date(date, rows))
        .collect();

    Ok(ValuationSeries::new(portfolio.id, snapshots))
}

/// Computes a portfolio's value series over an explicit valuation schedule.
///
/// Same pass as [`accumulate`], but snapshots are emitted for the schedule
/// dates instead of the dates found in `rows`. A schedule date with no rows
/// contributes the uninvested cash balance alone, so a portfolio with no
/// holdings values at its starting capital on every date. Rows dated
/// outside the schedule take no part in the pass.
///
/// `schedule` must be in ascending order.
///
/// # Errors
///
/// - `ConfigurationError::NonPositiveStartingCapital` when the portfolio's
///   starting capital is zero or negative.
/// - `DataIntegrityError` when any row is invalid (see [`accumulate`]).
pub fn accumulate_over(
    portfolio: &Portfolio,
    rows: &[HoldingPriceRow],
    schedule: &[Date],
) -> AnalyticsResult<ValuationSeries> {
    portfolio.validate_capital()?;

    let groups = group_by_date(rows)?;
    let mut pass = AccumulationPass::new(portfolio.starting_capital);

    let snapshots = schedule
        .iter()
        .map(|&date| {
            let rows = groups.get(&date).map_or(&[][..], Vec::as_slice);
            pass.value_date(date, rows)
        })
        .collect();

    Ok(ValuationSeries::new(portfolio.id, snapshots))
}

/// Validates every row and groups them by price date in ascending order.
fn group_by_date(rows: &[HoldingPriceRow]) -> AnalyticsResult<BTreeMap<Date, Vec<&HoldingPriceRow>>> {
    let mut groups: BTreeMap<Date, Vec<&HoldingPriceRow>> = BTreeMap::new();

    for row in rows {
        row.validate()?;
        groups.entry(row.price_date).or_default().push(row);
    }

    Ok(groups)
}
