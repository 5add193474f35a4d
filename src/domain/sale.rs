use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::money::Money;

/// A single sales transaction linking a customer to a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Unique identifier of the transaction.
    pub transaction_id: i32,
    /// Customer who made the purchase.
    pub customer_id: i32,
    /// Product that was purchased.
    pub product_id: i32,
    /// Calendar day of the transaction.
    pub date: NaiveDate,
    /// Number of units purchased, at least one.
    pub quantity: i32,
    /// Amount charged, fixed at the product price in effect on `date`.
    pub total: Money,
}

/// Payload required to insert a new sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub customer_id: i32,
    pub product_id: i32,
    pub date: NaiveDate,
    pub quantity: i32,
    pub total: Money,
}

impl NewSale {
    /// Price a sale of `quantity` units at `unit_price`.
    ///
    /// The total is captured once here and is never recomputed from later
    /// product prices. Quantities below one are raised to one.
    pub fn priced(
        customer_id: i32,
        product_id: i32,
        unit_price: Money,
        date: NaiveDate,
        quantity: i32,
    ) -> Self {
        let quantity = quantity.max(1);
        Self {
            customer_id,
            product_id,
            date,
            quantity,
            total: Money(unit_price.cents() * i64::from(quantity)),
        }
    }
}
