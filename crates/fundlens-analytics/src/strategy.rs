//! Strategy mix breakdown.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Portfolio;

/// Number of portfolios running one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCount {
    /// Strategy name.
    pub strategy: String,

    /// Portfolios declaring this strategy.
    pub total: usize,
}

/// Counts portfolios per declared strategy.
///
/// Sorted by descending count, ties broken by strategy name so the
/// output is deterministic.
#[must_use]
pub fn strategy_counts(portfolios: &[Portfolio]) -> Vec<StrategyCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for portfolio in portfolios {
        *counts.entry(portfolio.strategy.as_str()).or_default() += 1;
    }

    let mut breakdown: Vec<StrategyCount> = counts
        .into_iter()
        .map(|(strategy, total)| StrategyCount {
            strategy: strategy.to_string(),
            total,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.strategy.cmp(&b.strategy))
    });
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn portfolio(id: i64, strategy: &str) -> Portfolio {
        Portfolio::new(id, format!("P{id}"), 2020, dec!(1_000_000), strategy)
    }

    #[test]
    fn test_counts_sorted_descending() {
        let portfolios = vec![
            portfolio(1, "Active"),
            portfolio(2, "Passive"),
            portfolio(3, "Active"),
            portfolio(4, "Discretionary"),
            portfolio(5, "Active"),
            portfolio(6, "Passive"),
        ];

        let counts = strategy_counts(&portfolios);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].strategy, "Active");
        assert_eq!(counts[0].total, 3);
        assert_eq!(counts[1].strategy, "Passive");
        assert_eq!(counts[1].total, 2);
        assert_eq!(counts[2].strategy, "Discretionary");
        assert_eq!(counts[2].total, 1);
    }

    #[test]
    fn test_ties_break_by_name() {
        let portfolios = vec![portfolio(1, "Passive"), portfolio(2, "Active")];
        let counts = strategy_counts(&portfolios);
        assert_eq!(counts[0].strategy, "Active");
        assert_eq!(counts[1].strategy, "Passive");
    }

    #[test]
    fn test_empty() {
        assert!(strategy_counts(&[]).is_empty());
    }
}
