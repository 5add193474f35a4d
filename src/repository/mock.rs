use mockall::mock;

use super::{CustomerReader, ProductReader, SaleReader, SeedWriter};
use crate::domain::{customer::Customer, product::Product, sale::Sale, seed::SeedBatch};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub DashboardReader {}

    impl CustomerReader for DashboardReader {
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl ProductReader for DashboardReader {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl SaleReader for DashboardReader {
        fn list_sales(&self) -> RepositoryResult<Vec<Sale>>;
    }
}

mock! {
    pub SeedStore {}

    impl SeedWriter for SeedStore {
        fn write_seed(&self, batch: &SeedBatch) -> RepositoryResult<usize>;
    }
}
