use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
    pub join_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub location: &'a str,
    pub join_date: NaiveDate,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            // Rows written outside this crate may carry padding.
            location: value.location.trim().to_string(),
            join_date: value.join_date,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            location: value.location.as_str(),
            join_date: value.join_date,
        }
    }
}
