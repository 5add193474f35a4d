use diesel::prelude::*;

use crate::domain::money::Money;
use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductCategory, UnknownCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub price_cents: i64,
}

impl TryFrom<Product> for DomainProduct {
    type Error = UnknownCategory;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            category: value.category.parse::<ProductCategory>()?,
            price: Money(value.price_cents),
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            category: value.category.as_str(),
            price_cents: value.price.cents(),
        }
    }
}
