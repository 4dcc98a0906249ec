use serde::Deserialize;

pub use errors::{ServiceError, ServiceResult};

pub mod cart;
pub mod errors;
pub mod favorites;
pub mod orders;
pub mod products;

/// Query parameters accepted by endpoints scoped to one customer.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub customer_id: Option<String>,
}

impl CustomerQuery {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
        }
    }

    /// The trimmed customer id, or a validation error naming the parameter.
    fn require_customer_id(self) -> ServiceResult<String> {
        self.customer_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ServiceError::Validation("customer_id is required".to_string()))
    }
}
