use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::sale::Sale as DomainSale,
    models::sale::Sale as DbSale,
    repository::{DieselRepository, SaleReader},
};

impl SaleReader for DieselRepository {
    fn list_sales(&self) -> RepositoryResult<Vec<DomainSale>> {
        use crate::schema::sales;

        let mut conn = self.conn()?;
        let items = sales::table
            .order(sales::transaction_id.asc())
            .load::<DbSale>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}
