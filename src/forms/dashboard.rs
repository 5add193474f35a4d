use pushkind_common::routes::empty_string_as_none;
use serde::{Deserialize, Serialize};

use crate::domain::filter::{DashboardFilter, DateRange, FilterError, parse_date};

/// Query string submitted by the dashboard filter sidebar.
///
/// Locations arrive as repeated keys (`location=NY&location=LA`), so the
/// query must be decoded with `serde_html_form`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DashboardQuery {
    /// Selected customer locations.
    #[serde(default)]
    pub location: Vec<String>,
    /// First day of the range, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start: Option<String>,
    /// Last day of the range, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end: Option<String>,
    /// Present once the user has submitted the form. Without it an empty
    /// location list means "everything" rather than "nothing".
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub applied: Option<String>,
}

impl DashboardQuery {
    /// Decode a raw query string.
    pub fn from_query_string(query: &str) -> Result<Self, serde::de::value::Error> {
        serde_html_form::from_str(query)
    }

    /// Resolve the query against the available locations and default range.
    ///
    /// Missing dates fall back to the matching bound of `default_range`.
    pub fn into_filter(
        self,
        available_locations: &[String],
        default_range: DateRange,
    ) -> Result<DashboardFilter, FilterError> {
        let start = match self.start.as_deref() {
            Some(value) => parse_date(value)?,
            None => default_range.start(),
        };
        let end = match self.end.as_deref() {
            Some(value) => parse_date(value)?,
            None => default_range.end(),
        };
        let date_range = DateRange::new(start, end)?;

        let locations: Vec<String> = if self.applied.is_none() && self.location.is_empty() {
            available_locations.to_vec()
        } else {
            self.location
                .into_iter()
                .map(|location| location.trim().to_string())
                .filter(|location| !location.is_empty())
                .collect()
        };

        Ok(DashboardFilter::new(locations, date_range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn defaults() -> (Vec<String>, DateRange) {
        (
            vec!["LA".to_string(), "NY".to_string()],
            DateRange::new(day(2024, 1, 5), day(2024, 2, 10)).expect("valid range"),
        )
    }

    #[test]
    fn decodes_repeated_locations() {
        let query = DashboardQuery::from_query_string(
            "location=NY&location=LA&start=2024-01-01&end=2024-12-31&applied=1",
        )
        .expect("query decodes");

        assert_eq!(query.location, vec!["NY".to_string(), "LA".to_string()]);
        assert_eq!(query.start.as_deref(), Some("2024-01-01"));
        assert_eq!(query.end.as_deref(), Some("2024-12-31"));
        assert_eq!(query.applied.as_deref(), Some("1"));
    }

    #[test]
    fn blank_query_uses_defaults() {
        let (locations, range) = defaults();
        let query = DashboardQuery::from_query_string("start=&end=").expect("query decodes");

        let filter = query.into_filter(&locations, range).expect("valid filter");

        assert_eq!(filter.locations.len(), 2);
        assert_eq!(filter.date_range, range);
    }

    #[test]
    fn submitted_form_without_locations_selects_nothing() {
        let (locations, range) = defaults();
        let query = DashboardQuery::from_query_string("applied=1").expect("query decodes");

        let filter = query.into_filter(&locations, range).expect("valid filter");

        assert!(filter.locations.is_empty());
    }

    #[test]
    fn partial_range_keeps_default_bound() {
        let (locations, range) = defaults();
        let query = DashboardQuery {
            start: Some("2024-01-20".to_string()),
            ..DashboardQuery::default()
        };

        let filter = query.into_filter(&locations, range).expect("valid filter");

        assert_eq!(filter.date_range.start(), day(2024, 1, 20));
        assert_eq!(filter.date_range.end(), day(2024, 2, 10));
    }

    #[test]
    fn rejects_malformed_and_inverted_dates() {
        let (locations, range) = defaults();

        let query = DashboardQuery {
            start: Some("01/05/2024".to_string()),
            ..DashboardQuery::default()
        };
        assert!(matches!(
            query.into_filter(&locations, range),
            Err(FilterError::InvalidDate(_))
        ));

        let query = DashboardQuery {
            start: Some("2024-03-01".to_string()),
            end: Some("2024-02-01".to_string()),
            ..DashboardQuery::default()
        };
        assert!(matches!(
            query.into_filter(&locations, range),
            Err(FilterError::InvertedRange { .. })
        ));
    }
}
