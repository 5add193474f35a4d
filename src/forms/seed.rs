use std::env;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Upper bound for any single generated relation.
const MAX_ROWS: u64 = 100_000;

pub const DEFAULT_CUSTOMERS: usize = 100;
pub const DEFAULT_PRODUCTS: usize = 20;
pub const DEFAULT_SALES: usize = 500;

/// Errors that can occur while reading the generator settings.
#[derive(Debug, Error)]
pub enum SeedFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// An environment variable was set to something other than a count.
    #[error("{name} must be a positive integer, got `{value}`")]
    InvalidCount { name: &'static str, value: String },
}

/// How many rows of each relation the generator should create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct SeedForm {
    #[validate(range(min = 1, max = MAX_ROWS))]
    pub customers: u64,
    #[validate(range(min = 1, max = MAX_ROWS))]
    pub products: u64,
    #[validate(range(min = 1, max = MAX_ROWS))]
    pub sales: u64,
}

impl Default for SeedForm {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS as u64,
            products: DEFAULT_PRODUCTS as u64,
            sales: DEFAULT_SALES as u64,
        }
    }
}

/// Validated row counts for one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub customers: usize,
    pub products: usize,
    pub sales: usize,
}

impl SeedForm {
    /// Read `SEED_CUSTOMERS`, `SEED_PRODUCTS` and `SEED_SALES`, keeping the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, SeedFormError> {
        let defaults = Self::default();
        Ok(Self {
            customers: read_count("SEED_CUSTOMERS", defaults.customers)?,
            products: read_count("SEED_PRODUCTS", defaults.products)?,
            sales: read_count("SEED_SALES", defaults.sales)?,
        })
    }

    /// Validate the counts and convert them into a [`SeedPlan`].
    pub fn into_plan(self) -> Result<SeedPlan, SeedFormError> {
        self.validate()?;
        Ok(SeedPlan {
            customers: self.customers as usize,
            products: self.products as usize,
            sales: self.sales as usize,
        })
    }
}

fn read_count(name: &'static str, default: u64) -> Result<u64, SeedFormError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| SeedFormError::InvalidCount { name, value }),
        Err(_) => Ok(default),
    }
}
