//! Synthetic data generator for the demo store.

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use rand::Rng;

use crate::domain::customer::NewCustomer;
use crate::domain::money::Money;
use crate::domain::product::{NewProduct, ProductCategory};
use crate::domain::seed::{SaleDraft, SeedBatch};
use crate::forms::seed::SeedPlan;
use crate::repository::SeedWriter;
use crate::services::{ServiceError, ServiceResult};

/// Customers join at most this many days before the run.
const JOIN_WINDOW_DAYS: u64 = 730;
/// Sales happen at most this many days before the run.
const SALES_WINDOW_DAYS: u64 = 365;
const MIN_PRICE_CENTS: i64 = 1_000;
const MAX_PRICE_CENTS: i64 = 50_000;
const MAX_QUANTITY: i32 = 5;

/// Rows inserted by one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub products: usize,
    pub sales: usize,
}

/// Fill the store with random customers, products and sales dated up to `today`.
///
/// The whole run is stored in one transaction: on error the store is left as
/// it was.
pub fn seed_database<R>(repo: &R, plan: SeedPlan, today: NaiveDate) -> ServiceResult<SeedSummary>
where
    R: SeedWriter + ?Sized,
{
    seed_with_rng(repo, plan, today, &mut rand::rng())
}

/// Same as [`seed_database`] with a caller-supplied random source.
pub fn seed_with_rng<R, G>(
    repo: &R,
    plan: SeedPlan,
    today: NaiveDate,
    rng: &mut G,
) -> ServiceResult<SeedSummary>
where
    R: SeedWriter + ?Sized,
    G: Rng + ?Sized,
{
    if plan.sales > 0 && (plan.customers == 0 || plan.products == 0) {
        log::error!("Cannot generate sales without customers and products");
        return Err(ServiceError::NotFound);
    }

    let batch = generate_batch(plan, today, rng);
    let sales = repo.write_seed(&batch).map_err(ServiceError::from)?;

    let summary = SeedSummary {
        customers: batch.customers.len(),
        products: batch.products.len(),
        sales,
    };
    log::info!(
        "Inserted {} customers, {} products and {} sales",
        summary.customers,
        summary.products,
        summary.sales
    );
    Ok(summary)
}

/// Draw the rows of one generator run.
pub fn generate_batch<G>(plan: SeedPlan, today: NaiveDate, rng: &mut G) -> SeedBatch
where
    G: Rng + ?Sized,
{
    let customers: Vec<NewCustomer> = (0..plan.customers)
        .map(|_| fake_customer(today, rng))
        .collect();
    let products: Vec<NewProduct> = (0..plan.products).map(|_| fake_product(rng)).collect();

    let sales = if customers.is_empty() || products.is_empty() {
        Vec::new()
    } else {
        (0..plan.sales)
            .map(|_| SaleDraft {
                customer: rng.random_range(0..customers.len()),
                product: rng.random_range(0..products.len()),
                date: days_before(today, rng.random_range(0..=SALES_WINDOW_DAYS)),
                quantity: rng.random_range(1..=MAX_QUANTITY),
            })
            .collect()
    };

    SeedBatch {
        customers,
        products,
        sales,
    }
}

fn fake_customer<G: Rng + ?Sized>(today: NaiveDate, rng: &mut G) -> NewCustomer {
    let name: String = Name().fake_with_rng(rng);
    let email: String = SafeEmail().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let join_date = days_before(today, rng.random_range(0..=JOIN_WINDOW_DAYS));
    NewCustomer::new(name, email, city, join_date)
}

fn fake_product<G: Rng + ?Sized>(rng: &mut G) -> NewProduct {
    let word: String = Word().fake_with_rng(rng);
    let category = ProductCategory::ALL[rng.random_range(0..ProductCategory::ALL.len())];
    let price = Money(rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS));
    NewProduct::new(capitalize(&word), category, price)
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
