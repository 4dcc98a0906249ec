use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// A product saved by a customer for later.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Favorite {
    /// Unique identifier of the favorite.
    pub id: String,
    /// Customer who saved the product.
    pub customer_id: String,
    /// Saved product identifier.
    pub product_id: String,
    /// Timestamp for when the product was saved.
    pub created_at: NaiveDateTime,
    /// Product details, present when the favorite was loaded together with its product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Payload required to save a product as a favorite.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub customer_id: String,
    pub product_id: String,
    pub created_at: NaiveDateTime,
}

impl NewFavorite {
    pub fn new(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
