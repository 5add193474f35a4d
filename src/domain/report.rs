//! Output records produced by the aggregation pipeline.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::domain::money::Money;

/// Headline metrics for the filtered sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
    /// Sum of all sale totals.
    pub total_revenue: Money,
    /// Number of sales rows.
    pub total_orders: usize,
    /// Number of distinct customers among the sales.
    pub unique_customers: usize,
}

/// Calendar month used as a bucketing key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Month that contains `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Revenue booked within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub revenue: Money,
}

/// Units sold of a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSales {
    pub product_id: i32,
    /// Display name of the product.
    pub name: String,
    pub units_sold: i64,
}

/// Revenue attributed to customers of one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRevenue {
    pub location: String,
    pub revenue: Money,
}

/// Total spent by one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSpend {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub total_spent: Money,
}

/// Everything the dashboard displays for one filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    pub kpis: Kpis,
    /// Ascending by month; months without sales are absent.
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// At most five entries, best sellers first.
    pub top_products: Vec<ProductSales>,
    /// Every location with at least one sale, highest revenue first.
    pub revenue_by_location: Vec<LocationRevenue>,
    /// At most ten entries, biggest spenders first.
    pub top_spenders: Vec<CustomerSpend>,
}

impl DashboardReport {
    /// Whether the selection matched no sales at all.
    pub fn is_empty(&self) -> bool {
        self.kpis.total_orders == 0
    }
}
