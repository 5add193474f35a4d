//! Load-once copy of the three relations the dashboard reads.
//!
//! A [`Snapshot`] is validated for referential integrity when it is built:
//! customers without a location are set aside, and sales that reference an
//! unknown or set-aside customer or an unknown product are dropped and logged,
//! so downstream joins never see an orphan.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use chrono::NaiveDate;

use crate::domain::customer::Customer;
use crate::domain::filter::DateRange;
use crate::domain::product::Product;
use crate::domain::sale::Sale;
use crate::repository::{CustomerReader, ProductReader, SaleReader};
use crate::services::{ServiceError, ServiceResult};

/// Immutable view of customers, products and sales.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    customers: Vec<Customer>,
    products: Vec<Product>,
    sales: Vec<Sale>,
    customer_index: HashMap<i32, usize>,
    product_index: HashMap<i32, usize>,
    orphaned_sales: Vec<i32>,
}

impl Snapshot {
    /// Build a snapshot, discarding sales whose foreign keys do not resolve.
    ///
    /// A customer with a blank location can never be selected by a location
    /// filter, so it is excluded and its sales count as orphaned.
    pub fn new(customers: Vec<Customer>, products: Vec<Product>, sales: Vec<Sale>) -> Self {
        let (customers, unlocated): (Vec<Customer>, Vec<Customer>) = customers
            .into_iter()
            .partition(|customer| !customer.location.trim().is_empty());

        if !unlocated.is_empty() {
            let ids: Vec<i32> = unlocated.iter().map(|customer| customer.id).collect();
            log::warn!(
                "Skipping {} customers without a location: {:?}",
                ids.len(),
                ids
            );
        }

        let customer_index: HashMap<i32, usize> = customers
            .iter()
            .enumerate()
            .map(|(idx, customer)| (customer.id, idx))
            .collect();
        let product_index: HashMap<i32, usize> = products
            .iter()
            .enumerate()
            .map(|(idx, product)| (product.id, idx))
            .collect();

        let (sales, orphans): (Vec<Sale>, Vec<Sale>) = sales.into_iter().partition(|sale| {
            customer_index.contains_key(&sale.customer_id)
                && product_index.contains_key(&sale.product_id)
        });

        let orphaned_sales: Vec<i32> = orphans.iter().map(|sale| sale.transaction_id).collect();
        if !orphaned_sales.is_empty() {
            log::warn!(
                "Skipping {} sales with unknown or unlocated customer or unknown product: {:?}",
                orphaned_sales.len(),
                orphaned_sales
            );
        }

        Self {
            customers,
            products,
            sales,
            customer_index,
            product_index,
            orphaned_sales,
        }
    }

    /// Read all three relations from the store.
    pub fn load<R>(repo: &R) -> ServiceResult<Self>
    where
        R: CustomerReader + ProductReader + SaleReader + ?Sized,
    {
        let customers = repo.list_customers().map_err(ServiceError::from)?;
        let products = repo.list_products().map_err(ServiceError::from)?;
        let sales = repo.list_sales().map_err(ServiceError::from)?;

        log::info!(
            "Loaded {} customers, {} products, {} sales",
            customers.len(),
            products.len(),
            sales.len()
        );

        Ok(Self::new(customers, products, sales))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Sales with valid references, in transaction order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Transaction ids dropped because of dangling references.
    pub fn orphaned_sales(&self) -> &[i32] {
        &self.orphaned_sales
    }

    pub fn customer(&self, id: i32) -> Option<&Customer> {
        self.customer_index.get(&id).map(|&idx| &self.customers[idx])
    }

    pub fn product(&self, id: i32) -> Option<&Product> {
        self.product_index.get(&id).map(|&idx| &self.products[idx])
    }

    /// Distinct customer locations, sorted.
    pub fn locations(&self) -> Vec<String> {
        self.customers
            .iter()
            .map(|customer| customer.location.as_str())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Range spanning the earliest to the latest sale, if any sales exist.
    pub fn sales_date_range(&self) -> Option<DateRange> {
        let mut dates = self.sales.iter().map(|sale| sale.date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), date: NaiveDate| {
            (min.min(date), max.max(date))
        });
        DateRange::new(min, max).ok()
    }
}

/// Explicit load-once holder for a [`Snapshot`].
///
/// Populated by the first successful [`SnapshotCache::load`]; never expires.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    snapshot: OnceLock<Arc<Snapshot>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot, reading it from `repo` on first use.
    pub fn load<R>(&self, repo: &R) -> ServiceResult<Arc<Snapshot>>
    where
        R: CustomerReader + ProductReader + SaleReader + ?Sized,
    {
        if let Some(snapshot) = self.snapshot.get() {
            return Ok(Arc::clone(snapshot));
        }

        let loaded = Arc::new(Snapshot::load(repo)?);
        // A concurrent loader may have won; keep whichever was stored first.
        Ok(Arc::clone(self.snapshot.get_or_init(|| loaded)))
    }
}
