use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a store customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: String,
    /// Primary email address stored in lowercase for comparisons.
    pub email: String,
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Timestamp for when the customer record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// Primary email address stored in lowercase for comparisons.
    pub email: String,
    /// Human-friendly display name of the customer.
    pub name: String,
    /// Timestamp captured when the customer payload was created.
    pub created_at: NaiveDateTime,
}

impl NewCustomer {
    /// Build a new customer payload while normalising the email to lowercase.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into().to_lowercase(),
            name: name.into(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
