//! The joined holdings-with-prices row consumed by the accumulator.

use fundlens_core::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DataIntegrityError;

/// One row of the holdings-with-prices view.
///
/// The relational collaborator joins each portfolio holding against the
/// weekly price history of its stock, emitting one row per (stock, price
/// date) pair with the observation on or after the purchase. The row is
/// already shaped for accumulation; no further joining happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingPriceRow {
    /// The portfolio that holds the stock.
    pub portfolio_id: i64,

    /// The stock held.
    pub stock_id: i64,

    /// Shares bought in the single recorded purchase of this stock.
    pub shares_purchased: Decimal,

    /// Date of the purchase transaction.
    pub purchase_date: Date,

    /// Observed price of the stock on `price_date`.
    pub price: Decimal,

    /// Date of the price observation.
    pub price_date: Date,
}

impl HoldingPriceRow {
    /// Market value of the position at this observation.
    #[must_use]
    pub fn market_value(&self) -> Decimal {
        self.price * self.shares_purchased
    }

    /// Validates the row against the upstream join contract.
    ///
    /// # Errors
    ///
    /// Returns `DataIntegrityError::NonPositivePrice` for a zero or
    /// negative price, or `DataIntegrityError::PriceBeforePurchase` when
    /// the observation predates the purchase.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        if self.price <= Decimal::ZERO {
            return Err(DataIntegrityError::NonPositivePrice {
                stock_id: self.stock_id,
                date: self.price_date,
                price: self.price,
            });
        }
        if self.price_date < self.purchase_date {
            return Err(DataIntegrityError::PriceBeforePurchase {
                stock_id: self.stock_id,
                price_date: self.price_date,
                purchase_date: self.purchase_date,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row() -> HoldingPriceRow {
        HoldingPriceRow {
            portfolio_id: 1,
            stock_id: 10,
            shares_purchased: dec!(1000),
            purchase_date: Date::from_ymd(2020, 1, 3).unwrap(),
            price: dec!(100),
            price_date: Date::from_ymd(2020, 1, 3).unwrap(),
        }
    }

    #[test]
    fn test_market_value() {
        assert_eq!(row().market_value(), dec!(100_000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(row().validate().is_ok());
    }

    #[test]
    fn test_validate_non_positive_price() {
        let mut bad = row();
        bad.price = Decimal::ZERO;
        assert!(matches!(
            bad.validate(),
            Err(DataIntegrityError::NonPositivePrice { stock_id: 10, .. })
        ));
    }

    #[test]
    fn test_validate_price_before_purchase() {
        let mut bad = row();
        bad.price_date = Date::from_ymd(2019, 12, 27).unwrap();
        assert!(matches!(
            bad.validate(),
            Err(DataIntegrityError::PriceBeforePurchase { stock_id: 10, .. })
        ));
    }
}
