use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::seed::SeedBatch,
    models::{
        customer::NewCustomer as DbNewCustomer, product::NewProduct as DbNewProduct,
        sale::NewSale as DbNewSale,
    },
    repository::{DieselRepository, SeedWriter},
};

/// Rows per multi-row `INSERT`; keeps each statement far below SQLite's
/// bound parameter limit.
const INSERT_BATCH_SIZE: usize = 1_000;

impl SeedWriter for DieselRepository {
    fn write_seed(&self, batch: &SeedBatch) -> RepositoryResult<usize> {
        use crate::schema::{customers, products, sales};

        let mut conn = self.conn()?;

        let inserted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut customer_ids = Vec::with_capacity(batch.customers.len());
            for customer in &batch.customers {
                let id = diesel::insert_into(customers::table)
                    .values(DbNewCustomer::from(customer))
                    .returning(customers::id)
                    .get_result::<i32>(conn)?;
                customer_ids.push(id);
            }

            let mut product_ids = Vec::with_capacity(batch.products.len());
            for product in &batch.products {
                let id = diesel::insert_into(products::table)
                    .values(DbNewProduct::from(product))
                    .returning(products::id)
                    .get_result::<i32>(conn)?;
                product_ids.push(id);
            }

            let rows: Vec<DbNewSale> = batch
                .resolve_sales(&customer_ids, &product_ids)
                .iter()
                .map(Into::into)
                .collect();

            let mut inserted = 0;
            for chunk in rows.chunks(INSERT_BATCH_SIZE) {
                inserted += diesel::insert_into(sales::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(inserted)
        })?;

        Ok(inserted)
    }
}
