use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::domain::sale::Sale;
use crate::domain::seed::SeedBatch;

pub mod customer;
pub mod product;
pub mod sale;
pub mod seed;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only access to customer records.
pub trait CustomerReader {
    /// All customers ordered by id.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

/// Read-only access to product records.
pub trait ProductReader {
    /// All products ordered by id.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Read-only access to sales transactions.
pub trait SaleReader {
    /// All sales ordered by transaction id.
    fn list_sales(&self) -> RepositoryResult<Vec<Sale>>;
}

/// Bulk load used by the data generator.
pub trait SeedWriter {
    /// Store every row of `batch` in a single transaction and return the
    /// number of sales inserted. Nothing is stored when any insert fails.
    fn write_seed(&self, batch: &SeedBatch) -> RepositoryResult<usize>;
}
