use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain representation of a customer who places sales.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// City or region the customer is attributed to.
    pub location: String,
    /// Calendar day the customer signed up.
    pub join_date: NaiveDate,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Contact email address stored in lowercase.
    pub email: String,
    /// City or region the customer is attributed to.
    pub location: String,
    /// Calendar day the customer signed up.
    pub join_date: NaiveDate,
}

impl NewCustomer {
    /// Build a new customer payload while normalising the email to lowercase.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into().to_lowercase(),
            location: location.into().trim().to_string(),
            join_date,
        }
    }
}
