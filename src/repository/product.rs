use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::product::Product as DomainProduct, models::product::Product as DbProduct,
    repository::{DieselRepository, ProductReader},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let items = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        let mut result = Vec::with_capacity(items.len());
        for item in items {
            let id = item.id;
            match DomainProduct::try_from(item) {
                Ok(product) => result.push(product),
                // Sales of a skipped product are later dropped as orphans.
                Err(err) => log::warn!("Skipping product {id}: {err}"),
            }
        }

        Ok(result)
    }
}
