use chrono::NaiveDate;

use crate::domain::customer::NewCustomer;
use crate::domain::product::NewProduct;
use crate::domain::sale::NewSale;

/// Sale that points at a customer and a product of the same [`SeedBatch`]
/// by position, before either has been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    /// Index into [`SeedBatch::customers`].
    pub customer: usize,
    /// Index into [`SeedBatch::products`].
    pub product: usize,
    pub date: NaiveDate,
    pub quantity: i32,
}

/// Everything one generator run writes, stored all-or-nothing.
#[derive(Debug, Clone, Default)]
pub struct SeedBatch {
    pub customers: Vec<NewCustomer>,
    pub products: Vec<NewProduct>,
    pub sales: Vec<SaleDraft>,
}

impl SeedBatch {
    /// Turn the drafts into insertable sales once the referenced rows have ids.
    ///
    /// `customer_ids` and `product_ids` follow the order of `customers` and
    /// `products`. Each sale is priced at its product's price. Drafts pointing
    /// past either list are dropped.
    pub fn resolve_sales(&self, customer_ids: &[i32], product_ids: &[i32]) -> Vec<NewSale> {
        self.sales
            .iter()
            .filter_map(|draft| {
                let customer_id = *customer_ids.get(draft.customer)?;
                let product_id = *product_ids.get(draft.product)?;
                let product = self.products.get(draft.product)?;
                Some(NewSale::priced(
                    customer_id,
                    product_id,
                    product.price,
                    draft.date,
                    draft.quantity,
                ))
            })
            .collect()
    }
}
