use std::sync::Arc;

use serde::Serialize;

use crate::domain::filter::{DATE_FORMAT, DashboardFilter, DateRange};
use crate::domain::report::DashboardReport;
use crate::forms::dashboard::DashboardQuery;
use crate::repository::{CustomerReader, ProductReader, SaleReader};
use crate::services::snapshot::{Snapshot, SnapshotCache};
use crate::services::{ServiceError, ServiceResult, aggregation, filters};

/// Data required to render the dashboard for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPageData {
    /// Outputs of the aggregation pipeline.
    pub report: DashboardReport,
    /// The filter that produced `report`, after defaults were applied.
    pub filter: DashboardFilter,
    /// Every location that can be selected.
    pub locations: Vec<String>,
    /// Earliest and latest sale dates in the store.
    pub default_range: DateRange,
    /// Number of sales skipped because of dangling references.
    pub orphaned_sales: usize,
}

/// Loads the dashboard, reading the store only when the cache is cold.
pub fn load_dashboard<R>(
    cache: &SnapshotCache,
    repo: &R,
    query: DashboardQuery,
) -> ServiceResult<DashboardPageData>
where
    R: CustomerReader + ProductReader + SaleReader + ?Sized,
{
    let snapshot = cache.load(repo)?;
    build_dashboard(&snapshot, query)
}

/// Validates `query` against `snapshot` and runs the filter and aggregation
/// passes.
pub fn build_dashboard(
    snapshot: &Arc<Snapshot>,
    query: DashboardQuery,
) -> ServiceResult<DashboardPageData> {
    let locations = snapshot.locations();
    let default_range = snapshot
        .sales_date_range()
        .unwrap_or_else(|| DateRange::single_day(chrono::Local::now().date_naive()));

    let filter = query
        .into_filter(&locations, default_range)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let filtered = filters::resolve(snapshot.customers(), snapshot.sales(), &filter);
    log::debug!(
        "Filter matched {} customers and {} sales",
        filtered.customers.len(),
        filtered.sales.len()
    );

    let report = aggregation::run(snapshot, &filtered);

    Ok(DashboardPageData {
        report,
        filter,
        locations,
        default_range,
        orphaned_sales: snapshot.orphaned_sales().len(),
    })
}

/// View model exposed to the dashboard template.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub total_revenue: String,
    pub total_orders: usize,
    pub unique_customers: usize,
    /// `YYYY-MM` labels for the revenue line chart.
    pub monthly_labels: Vec<String>,
    pub monthly_values: Vec<f64>,
    pub top_products: Vec<TopProductRow>,
    pub location_labels: Vec<String>,
    pub location_values: Vec<f64>,
    pub top_spenders: Vec<SpenderRow>,
    pub locations: Vec<LocationOption>,
    pub start: String,
    pub end: String,
    pub min_date: String,
    pub max_date: String,
    pub orphaned_sales: usize,
    pub is_empty: bool,
}

/// Row of the best sellers table.
#[derive(Debug, Serialize)]
pub struct TopProductRow {
    pub name: String,
    pub units_sold: i64,
}

/// Row of the high spenders table and bar chart.
#[derive(Debug, Serialize)]
pub struct SpenderRow {
    pub name: String,
    pub email: String,
    pub total_spent: String,
    pub total_value: f64,
}

/// Entry of the location multi-select.
#[derive(Debug, Serialize)]
pub struct LocationOption {
    pub name: String,
    pub selected: bool,
}

impl From<&DashboardPageData> for DashboardView {
    fn from(data: &DashboardPageData) -> Self {
        let report = &data.report;
        let date = |value: chrono::NaiveDate| value.format(DATE_FORMAT).to_string();

        Self {
            total_revenue: report.kpis.total_revenue.to_string(),
            total_orders: report.kpis.total_orders,
            unique_customers: report.kpis.unique_customers,
            monthly_labels: report
                .monthly_revenue
                .iter()
                .map(|entry| entry.month.to_string())
                .collect(),
            monthly_values: report
                .monthly_revenue
                .iter()
                .map(|entry| entry.revenue.as_units())
                .collect(),
            top_products: report
                .top_products
                .iter()
                .map(|entry| TopProductRow {
                    name: entry.name.clone(),
                    units_sold: entry.units_sold,
                })
                .collect(),
            location_labels: report
                .revenue_by_location
                .iter()
                .map(|entry| entry.location.clone())
                .collect(),
            location_values: report
                .revenue_by_location
                .iter()
                .map(|entry| entry.revenue.as_units())
                .collect(),
            top_spenders: report
                .top_spenders
                .iter()
                .map(|entry| SpenderRow {
                    name: entry.name.clone(),
                    email: entry.email.clone(),
                    total_spent: entry.total_spent.to_string(),
                    total_value: entry.total_spent.as_units(),
                })
                .collect(),
            locations: data
                .locations
                .iter()
                .map(|name| LocationOption {
                    name: name.clone(),
                    selected: data.filter.locations.contains(name),
                })
                .collect(),
            start: date(data.filter.date_range.start()),
            end: date(data.filter.date_range.end()),
            min_date: date(data.default_range.start()),
            max_date: date(data.default_range.end()),
            orphaned_sales: data.orphaned_sales,
            is_empty: report.is_empty(),
        }
    }
}
