use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::money::Money;

/// Merchandising category a product is filed under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Kitchen")]
    HomeAndKitchen,
    Books,
    Toys,
}

impl ProductCategory {
    /// Every category in display order.
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::HomeAndKitchen,
        ProductCategory::Books,
        ProductCategory::Toys,
    ];

    /// Label stored in the database and shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::HomeAndKitchen => "Home & Kitchen",
            ProductCategory::Books => "Books",
            ProductCategory::Toys => "Toys",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored category label is not one of [`ProductCategory::ALL`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Domain representation of a product offered for sale.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Category the product belongs to.
    pub category: ProductCategory,
    /// Current unit price.
    pub price: Money,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Category the product belongs to.
    pub category: ProductCategory,
    /// Unit price, never negative.
    pub price: Money,
}

impl NewProduct {
    /// Build a new product payload. Negative prices are clamped to zero.
    pub fn new(name: impl Into<String>, category: ProductCategory, price: Money) -> Self {
        Self {
            name: name.into(),
            category,
            price: Money(price.cents().max(0)),
        }
    }
}
