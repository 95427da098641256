//! Parallel accumulation across portfolios.
//!
//! Each accumulation pass owns its own cash balance and deployed set, so
//! passes fan out across portfolios with no shared state. Uses rayon when
//! the `parallel` feature is enabled, sequential iteration otherwise.

use crate::accumulator::accumulate;
use crate::error::AnalyticsResult;
use crate::types::{HoldingPriceRow, Portfolio, ValuationSeries};

/// Runs one accumulation pass per portfolio.
///
/// Results are positional: `results[i]` is the outcome for `inputs[i]`.
/// A failed pass yields its error in place without disturbing the other
/// portfolios' passes.
///
/// With the `parallel` feature enabled, passes run on the rayon thread
/// pool when there is more than one portfolio.
#[must_use]
pub fn accumulate_portfolios(
    inputs: &[(Portfolio, Vec<HoldingPriceRow>)],
) -> Vec<AnalyticsResult<ValuationSeries>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if inputs.len() > 1 {
            return inputs
                .par_iter()
                .map(|(portfolio, rows)| accumulate(portfolio, rows))
                .collect();
        }
    }

    inputs
        .iter()
        .map(|(portfolio, rows)| accumulate(portfolio, rows))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlens_core::Date;
    use rust_decimal_macros::dec;

    #[test]
    fn test_failures_stay_positional() {
        let date = Date::from_ymd(2023, 1, 6).unwrap();
        let row = HoldingPriceRow {
            portfolio_id: 1,
            stock_id: 10,
            shares_purchased: dec!(100),
            purchase_date: date,
            price: dec!(50),
            price_date: date,
        };

        let inputs = vec![
            (
                Portfolio::new(1, "Alpha", 2023, dec!(1_000_000), "Active"),
                vec![row.clone()],
            ),
            // Empty holdings: this pass fails, the others survive.
            (
                Portfolio::new(2, "Beta", 2023, dec!(500_000), "Passive"),
                vec![],
            ),
            (
                Portfolio::new(3, "Gamma", 2023, dec!(750_000), "Active"),
                vec![HoldingPriceRow {
                    portfolio_id: 3,
                    ..row
                }],
            ),
        ];

        let results = accumulate_portfolios(&inputs);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        assert_eq!(results[2].as_ref().unwrap().portfolio_id, 3);
    }
}
