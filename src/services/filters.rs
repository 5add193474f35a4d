use std::collections::HashSet;

use crate::domain::customer::Customer;
use crate::domain::filter::DashboardFilter;
use crate::domain::sale::Sale;

/// Customers and sales that survive a [`DashboardFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredData<'a> {
    /// Customers in one of the selected locations, in input order.
    pub customers: Vec<&'a Customer>,
    /// Sales by those customers within the date range, in input order.
    pub sales: Vec<&'a Sale>,
}

/// Narrow customers to the selected locations and sales to those customers
/// within the inclusive date range.
///
/// An empty location selection selects nothing.
pub fn resolve<'a>(
    customers: &'a [Customer],
    sales: &'a [Sale],
    filter: &DashboardFilter,
) -> FilteredData<'a> {
    if filter.locations.is_empty() {
        return FilteredData::default();
    }

    let customers: Vec<&Customer> = customers
        .iter()
        .filter(|customer| filter.locations.contains(customer.location.as_str()))
        .collect();

    let customer_ids: HashSet<i32> = customers.iter().map(|customer| customer.id).collect();

    let sales: Vec<&Sale> = sales
        .iter()
        .filter(|sale| customer_ids.contains(&sale.customer_id))
        .filter(|sale| filter.date_range.contains(sale.date))
        .collect();

    FilteredData { customers, sales }
}
