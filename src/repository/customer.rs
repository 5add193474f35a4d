use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::customer::Customer as DomainCustomer, models::customer::Customer as DbCustomer,
    repository::{CustomerReader, DieselRepository},
};

impl CustomerReader for DieselRepository {
    fn list_customers(&self) -> RepositoryResult<Vec<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let items = customers::table
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}
