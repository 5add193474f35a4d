//! Metrics and rankings computed over filtered sales.
//!
//! Every ranking sorts stably by its key, descending, so ties keep the order
//! in which their group was first seen while walking the sales in transaction
//! order. Joins against the snapshot skip rows whose key does not resolve.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use crate::domain::money::Money;
use crate::domain::report::{
    CustomerSpend, DashboardReport, Kpis, LocationRevenue, MonthlyRevenue, ProductSales,
    YearMonth,
};
use crate::domain::sale::Sale;
use crate::services::filters::FilteredData;
use crate::services::snapshot::Snapshot;

/// Number of products listed in the best sellers table.
pub const TOP_PRODUCTS_LIMIT: usize = 5;
/// Number of customers listed in the high spenders table.
pub const TOP_SPENDERS_LIMIT: usize = 10;

/// Run every aggregation over the filtered sales.
pub fn run(snapshot: &Snapshot, filtered: &FilteredData<'_>) -> DashboardReport {
    let sales = filtered.sales.as_slice();
    DashboardReport {
        kpis: kpis(sales),
        monthly_revenue: monthly_revenue(sales),
        top_products: top_products(snapshot, sales, TOP_PRODUCTS_LIMIT),
        revenue_by_location: revenue_by_location(snapshot, sales),
        top_spenders: top_spenders(snapshot, sales, TOP_SPENDERS_LIMIT),
    }
}

pub fn kpis(sales: &[&Sale]) -> Kpis {
    let unique_customers = sales
        .iter()
        .map(|sale| sale.customer_id)
        .collect::<HashSet<i32>>()
        .len();

    Kpis {
        total_revenue: sales.iter().map(|sale| sale.total).sum(),
        total_orders: sales.len(),
        unique_customers,
    }
}

/// Revenue per calendar month, oldest first. Months without sales are omitted.
pub fn monthly_revenue(sales: &[&Sale]) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for sale in sales {
        *buckets.entry(YearMonth::of(sale.date)).or_default() += sale.total;
    }

    buckets
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

/// Products ranked by units sold.
pub fn top_products(snapshot: &Snapshot, sales: &[&Sale], limit: usize) -> Vec<ProductSales> {
    let groups = ranked_sums(
        sales
            .iter()
            .map(|sale| (sale.product_id, i64::from(sale.quantity))),
    );

    groups
        .into_iter()
        .filter_map(|(product_id, units_sold)| {
            snapshot.product(product_id).map(|product| ProductSales {
                product_id,
                name: product.name.clone(),
                units_sold,
            })
        })
        .take(limit)
        .collect()
}

/// Revenue per customer location, highest first. Only locations with sales appear.
pub fn revenue_by_location(snapshot: &Snapshot, sales: &[&Sale]) -> Vec<LocationRevenue> {
    let groups = ranked_sums(sales.iter().filter_map(|sale| {
        snapshot
            .customer(sale.customer_id)
            .map(|customer| (customer.location.as_str(), sale.total.cents()))
    }));

    groups
        .into_iter()
        .map(|(location, revenue)| LocationRevenue {
            location: location.to_string(),
            revenue: Money(revenue),
        })
        .collect()
}

/// Customers ranked by total spent.
pub fn top_spenders(snapshot: &Snapshot, sales: &[&Sale], limit: usize) -> Vec<CustomerSpend> {
    let groups = ranked_sums(
        sales
            .iter()
            .map(|sale| (sale.customer_id, sale.total.cents())),
    );

    groups
        .into_iter()
        .filter_map(|(customer_id, total)| {
            snapshot.customer(customer_id).map(|customer| CustomerSpend {
                customer_id,
                name: customer.name.clone(),
                email: customer.email.clone(),
                total_spent: Money(total),
            })
        })
        .take(limit)
        .collect()
}

/// Sum values per key and rank the groups by sum, descending.
///
/// Groups are kept in first-seen order before a stable sort, which makes ties
/// deterministic.
fn ranked_sums<K, I>(items: I) -> Vec<(K, i64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, i64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, i64)> = Vec::new();

    for (key, value) in items {
        match index.get(&key) {
            Some(&slot) => groups[slot].1 += value,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, value));
            }
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::domain::customer::Customer;
    use crate::domain::filter::{DashboardFilter, DateRange};
    use crate::domain::product::{Product, ProductCategory};
    use crate::services::filters::resolve;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn customer(id: i32, name: &str, email: &str, location: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            location: location.to_string(),
            join_date: day(2023, 6, 1),
        }
    }

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: ProductCategory::Electronics,
            price: Money(price),
        }
    }

    fn sale(
        id: i32,
        customer_id: i32,
        product_id: i32,
        date: NaiveDate,
        quantity: i32,
        total: i64,
    ) -> Sale {
        Sale {
            transaction_id: id,
            customer_id,
            product_id,
            date,
            quantity,
            total: Money(total),
        }
    }

    fn scenario() -> Snapshot {
        Snapshot::new(
            vec![
                customer(1, "Ann", "a@x.com", "NY"),
                customer(2, "Bo", "b@x.com", "LA"),
            ],
            vec![product(1, "Widget", 999)],
            vec![
                sale(1, 1, 1, day(2024, 1, 5), 2, 1998),
                sale(2, 2, 1, day(2024, 2, 10), 1, 999),
            ],
        )
    }

    fn year_2024() -> DateRange {
        DateRange::new(day(2024, 1, 1), day(2024, 12, 31)).expect("valid range")
    }

    fn report_for(snapshot: &Snapshot, filter: &DashboardFilter) -> DashboardReport {
        let filtered = resolve(snapshot.customers(), snapshot.sales(), filter);
        run(snapshot, &filtered)
    }

    /// 40 customers over 6 cities, 12 products, 600 sales across two years.
    fn random_snapshot(seed: u64) -> Snapshot {
        let mut rng = StdRng::seed_from_u64(seed);
        let cities = ["NY", "LA", "SF", "Austin", "Boston", "Denver"];

        let customers: Vec<Customer> = (1..=40)
            .map(|id| {
                let city = cities[rng.random_range(0..cities.len())];
                customer(id, &format!("Customer {id}"), &format!("c{id}@x.com"), city)
            })
            .collect();
        let products: Vec<Product> = (1..=12)
            .map(|id| product(id, &format!("Product {id}"), rng.random_range(1_000..50_000)))
            .collect();

        let start = day(2023, 1, 1);
        let sales: Vec<Sale> = (1..=600)
            .map(|id| {
                let customer_id = rng.random_range(1..=40);
                let product = &products[rng.random_range(0..products.len())];
                let date = start + chrono::Days::new(rng.random_range(0..730));
                let quantity = rng.random_range(1..=5);
                let total = product.price.cents() * i64::from(quantity);
                sale(id, customer_id, product.id, date, quantity, total)
            })
            .collect();

        Snapshot::new(customers, products, sales)
    }

    #[test]
    fn scenario_all_locations() {
        let snapshot = scenario();
        let report = report_for(&snapshot, &DashboardFilter::new(["NY", "LA"], year_2024()));

        assert_eq!(report.kpis.total_revenue, Money(2997));
        assert_eq!(report.kpis.total_orders, 2);
        assert_eq!(report.kpis.unique_customers, 2);

        let months: Vec<(String, Money)> = report
            .monthly_revenue
            .iter()
            .map(|entry| (entry.month.to_string(), entry.revenue))
            .collect();
        assert_eq!(
            months,
            vec![
                ("2024-01".to_string(), Money(1998)),
                ("2024-02".to_string(), Money(999)),
            ]
        );

        assert_eq!(
            report.top_products,
            vec![ProductSales {
                product_id: 1,
                name: "Widget".to_string(),
                units_sold: 3,
            }]
        );

        let spenders: Vec<(&str, &str, Money)> = report
            .top_spenders
            .iter()
            .map(|s| (s.name.as_str(), s.email.as_str(), s.total_spent))
            .collect();
        assert_eq!(
            spenders,
            vec![("Ann", "a@x.com", Money(1998)), ("Bo", "b@x.com", Money(999))]
        );
    }

    #[test]
    fn scenario_single_location() {
        let snapshot = scenario();
        let report = report_for(&snapshot, &DashboardFilter::new(["NY"], year_2024()));

        assert_eq!(report.kpis.total_revenue, Money(1998));
        assert_eq!(report.kpis.total_orders, 1);
        assert_eq!(
            report.revenue_by_location,
            vec![LocationRevenue {
                location: "NY".to_string(),
                revenue: Money(1998),
            }]
        );
    }

    #[test]
    fn scenario_range_without_sales() {
        let snapshot = scenario();
        let range = DateRange::new(day(2025, 1, 1), day(2025, 12, 31)).expect("valid range");
        let report = report_for(&snapshot, &DashboardFilter::new(["NY", "LA"], range));

        assert_eq!(report, DashboardReport::default());
        assert!(report.is_empty());
    }

    #[test]
    fn empty_input_yields_zeroed_outputs() {
        let snapshot = Snapshot::default();
        let sales: Vec<&Sale> = Vec::new();

        assert_eq!(kpis(&sales), Kpis::default());
        assert!(monthly_revenue(&sales).is_empty());
        assert!(top_products(&snapshot, &sales, TOP_PRODUCTS_LIMIT).is_empty());
        assert!(revenue_by_location(&snapshot, &sales).is_empty());
        assert!(top_spenders(&snapshot, &sales, TOP_SPENDERS_LIMIT).is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let snapshot = Snapshot::new(
            vec![
                customer(1, "Ann", "a@x.com", "NY"),
                customer(2, "Bo", "b@x.com", "LA"),
                customer(3, "Cy", "c@x.com", "SF"),
            ],
            vec![
                product(1, "Alpha", 100),
                product(2, "Beta", 100),
                product(3, "Gamma", 100),
            ],
            vec![
                sale(1, 3, 3, day(2024, 1, 1), 2, 200),
                sale(2, 1, 1, day(2024, 1, 2), 2, 200),
                sale(3, 2, 2, day(2024, 1, 3), 1, 100),
                sale(4, 2, 2, day(2024, 1, 4), 1, 100),
            ],
        );
        let filter = DashboardFilter::new(["NY", "LA", "SF"], year_2024());
        let report = report_for(&snapshot, &filter);

        let products: Vec<&str> = report.top_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(products, vec!["Gamma", "Alpha", "Beta"]);

        let spenders: Vec<i32> = report.top_spenders.iter().map(|s| s.customer_id).collect();
        assert_eq!(spenders, vec![3, 1, 2]);

        let locations: Vec<&str> = report
            .revenue_by_location
            .iter()
            .map(|l| l.location.as_str())
            .collect();
        assert_eq!(locations, vec!["SF", "NY", "LA"]);
    }

    #[test]
    fn rankings_are_sorted_descending() {
        let snapshot = random_snapshot(7);
        let all = DashboardFilter::new(snapshot.locations(), year_2024());
        let report = report_for(&snapshot, &all);

        assert!(report.top_products.windows(2).all(|w| w[0].units_sold >= w[1].units_sold));
        assert!(report.revenue_by_location.windows(2).all(|w| w[0].revenue >= w[1].revenue));
        assert!(report.top_spenders.windows(2).all(|w| w[0].total_spent >= w[1].total_spent));
        assert!(report.monthly_revenue.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn totals_are_consistent_across_outputs() {
        let snapshot = random_snapshot(11);
        let locations = snapshot.locations();
        let filters = [
            DashboardFilter::new(locations.clone(), year_2024()),
            DashboardFilter::new(locations.iter().take(2).cloned(), year_2024()),
            DashboardFilter::new(
                locations.clone(),
                DateRange::new(day(2023, 3, 15), day(2024, 8, 20)).expect("valid range"),
            ),
            DashboardFilter::new(Vec::<String>::new(), year_2024()),
        ];

        for filter in &filters {
            let filtered = resolve(snapshot.customers(), snapshot.sales(), filter);
            let report = run(&snapshot, &filtered);

            assert_eq!(report.kpis.total_orders, filtered.sales.len());
            let expected: Money = filtered.sales.iter().map(|sale| sale.total).sum();
            assert_eq!(report.kpis.total_revenue, expected);
            assert!(report.kpis.unique_customers <= report.kpis.total_orders);

            let monthly: Money = report.monthly_revenue.iter().map(|m| m.revenue).sum();
            assert_eq!(monthly, report.kpis.total_revenue);

            let by_location: Money = report.revenue_by_location.iter().map(|l| l.revenue).sum();
            assert_eq!(by_location, report.kpis.total_revenue);

            assert!(report.top_products.len() <= TOP_PRODUCTS_LIMIT);
            for entry in &report.top_products {
                let units: i64 = filtered
                    .sales
                    .iter()
                    .filter(|sale| sale.product_id == entry.product_id)
                    .map(|sale| i64::from(sale.quantity))
                    .sum();
                assert_eq!(entry.units_sold, units);
            }

            assert!(report.top_spenders.len() <= TOP_SPENDERS_LIMIT);
            for entry in &report.top_spenders {
                let spent: Money = filtered
                    .sales
                    .iter()
                    .filter(|sale| sale.customer_id == entry.customer_id)
                    .map(|sale| sale.total)
                    .sum();
                assert_eq!(entry.total_spent, spent);
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let snapshot = random_snapshot(3);
        let filter = DashboardFilter::new(snapshot.locations(), year_2024());

        let first = report_for(&snapshot, &filter);
        let second = report_for(&snapshot, &filter);

        assert_eq!(first, second);
    }

    #[test]
    fn ranked_sums_merges_groups() {
        let groups = ranked_sums(vec![("a", 1), ("b", 5), ("a", 4), ("c", 5)]);
        assert_eq!(groups, vec![("a", 5), ("b", 5), ("c", 5)]);
    }
}
