//! Fund-wide aggregation across portfolios.
//!
//! Walks a weekly valuation schedule and sums every portfolio's value at
//! each date. Portfolios come into existence mid-timeline: the first date a
//! portfolio's series contributes, its starting capital is injected into
//! that date's fund total and counted as externally added capital. The fund
//! benchmark is a running compounding series with those capital injections,
//! not a pure geometric curve.

use std::collections::{HashMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundlens_core::Date;

use crate::benchmark::weekly_growth_factor;
use crate::types::{Portfolio, ValuationSeries};

/// Decimal places of fund totals.
const VALUE_DP: u32 = 2;

/// The aggregated fund value series with its benchmark.
///
/// All three columns are aligned: `values[i]` and `benchmark[i]` belong to
/// `dates[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundSeries {
    /// Weekly valuation dates in ascending order.
    pub dates: Vec<Date>,

    /// Total fund value per date, rounded to two decimal places.
    pub values: Vec<Decimal>,

    /// Benchmark value per date.
    ///
    /// Seeded with the first fund total, then compounded weekly off the
    /// previous benchmark value plus that week's injected capital.
    pub benchmark: Vec<f64>,
}

impl FundSeries {
    /// Returns the number of valuation dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Aggregates per-portfolio value series into one fund series.
///
/// For each schedule date, sums the value of every portfolio series that
/// has a snapshot on that date. The first time a portfolio contributes,
/// its starting capital is added to the fund total for that date as newly
/// injected external capital. Totals are rounded to two decimal places.
///
/// The benchmark column compounds at `annual_rate` (weekly periods): the
/// first entry equals the first fund total, and each following entry is
/// `(previous + capital injected this week) * weekly growth factor`.
///
/// Portfolios whose accumulation pass failed are simply absent from
/// `series`; the walk carries on without them.
#[must_use]
pub fn aggregate_fund(
    portfolios: &[Portfolio],
    series: &[ValuationSeries],
    dates: &[Date],
    annual_rate: f64,
) -> FundSeries {
    let weekly = weekly_growth_factor(annual_rate);
    let capital_by_id: HashMap<i64, Decimal> = portfolios
        .iter()
        .map(|p| (p.id, p.starting_capital))
        .collect();

    let mut seen: HashSet<i64> = HashSet::new();
    let mut values = Vec::with_capacity(dates.len());
    let mut benchmark: Vec<f64> = Vec::with_capacity(dates.len());

    for &date in dates {
        let mut total = Decimal::ZERO;
        let mut injected = Decimal::ZERO;

        for portfolio_series in series {
            let Some(value) = portfolio_series.value_on(date) else {
                continue;
            };
            total += value;

            if seen.insert(portfolio_series.portfolio_id) {
                let capital = capital_by_id
                    .get(&portfolio_series.portfolio_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                total += capital;
                injected += capital;
            }
        }

        let total = total.round_dp(VALUE_DP);
        values.push(total);

        let benchmark_value = match benchmark.last() {
            Some(previous) => (previous + injected.to_f64().unwrap_or(0.0)) * weekly,
            None => total.to_f64().unwrap_or(0.0),
        };
        benchmark.push(benchmark_value);
    }

    FundSeries {
        dates: dates.to_vec(),
        values,
        benchmark,
    }
}
