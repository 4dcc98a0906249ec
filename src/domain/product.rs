use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a product offered by the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional link to a product picture.
    pub image_url: Option<String>,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Current catalogue price.
    pub price: f64,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Optional link to a product picture.
    pub image_url: Option<String>,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Current catalogue price.
    pub price: f64,
    /// Timestamp captured when the product payload was created.
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            description: None,
            price,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a picture link to the product payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Changes applied when updating an existing product.
///
/// Name and price are always written; description and picture are only
/// touched when present.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            image_url: None,
        }
    }

    /// Replace the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the product picture link.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
