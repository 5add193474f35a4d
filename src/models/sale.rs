use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::money::Money;
use crate::domain::sale::{NewSale as DomainNewSale, Sale as DomainSale};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(
    table_name = crate::schema::sales,
    primary_key(transaction_id),
    belongs_to(super::customer::Customer, foreign_key = customer_id),
    belongs_to(super::product::Product, foreign_key = product_id)
)]
pub struct Sale {
    pub transaction_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub date: NaiveDate,
    pub quantity: i32,
    pub total_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sales)]
pub struct NewSale {
    pub customer_id: i32,
    pub product_id: i32,
    pub date: NaiveDate,
    pub quantity: i32,
    pub total_cents: i64,
}

impl From<Sale> for DomainSale {
    fn from(value: Sale) -> Self {
        Self {
            transaction_id: value.transaction_id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            date: value.date,
            quantity: value.quantity,
            total: Money(value.total_cents),
        }
    }
}

impl From<&DomainNewSale> for NewSale {
    fn from(value: &DomainNewSale) -> Self {
        Self {
            customer_id: value.customer_id,
            product_id: value.product_id,
            date: value.date,
            quantity: value.quantity,
            total_cents: value.total.cents(),
        }
    }
}
