//! The strategy comparison report.

use serde::{Deserialize, Serialize};

use fundlens_analytics::{strategy_counts, Portfolio, StrategyCount};

/// Portfolio counts per declared strategy, descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyMixReport {
    /// Counts per strategy, most common first.
    pub counts: Vec<StrategyCount>,
}

/// Builds the strategy comparison report.
#[must_use]
pub fn build_strategy_mix_report(portfolios: &[Portfolio]) -> StrategyMixReport {
    StrategyMixReport {
        counts: strategy_counts(portfolios),
    }
}
