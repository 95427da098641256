//! Valuation snapshots and the per-portfolio value series.

use fundlens_core::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total portfolio value at one valuation date.
///
/// Derived, never stored or mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    /// The valuation date.
    pub date: Date,

    /// Total value: market value of deployed positions plus uninvested cash.
    pub value: Decimal,
}

impl ValuationSnapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub fn new(date: Date, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// A portfolio's value series, one snapshot per valuation date in
/// ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSeries {
    /// The portfolio this series was computed for.
    pub portfolio_id: i64,

    /// Snapshots in ascending date order.
    pub snapshots: Vec<ValuationSnapshot>,
}

impl ValuationSeries {
    /// Creates a series from snapshots already in ascending date order.
    #[must_use]
    pub fn new(portfolio_id: i64, snapshots: Vec<ValuationSnapshot>) -> Self {
        Self {
            portfolio_id,
            snapshots,
        }
    }

    /// Returns the number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if the series has no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the earliest snapshot.
    #[must_use]
    pub fn first(&self) -> Option<&ValuationSnapshot> {
        self.snapshots.first()
    }

    /// Returns the latest snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&ValuationSnapshot> {
        self.snapshots.last()
    }

    /// Looks up the value at an exact date.
    ///
    /// Binary search over the ascending snapshot dates.
    #[must_use]
    pub fn value_on(&self, date: Date) -> Option<Decimal> {
        self.snapshots
            .binary_search_by(|snapshot| snapshot.date.cmp(&date))
            .ok()
            .map(|index| self.snapshots[index].value)
    }

    /// Iterates over the valuation dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.snapshots.iter().map(|snapshot| snapshot.date)
    }
}
