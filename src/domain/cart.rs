use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One "add to cart" event for a customer.
///
/// Repeated additions of the same product produce separate items.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartItem {
    /// Unique identifier of the cart item.
    pub id: String,
    /// Customer owning the cart.
    pub customer_id: String,
    /// Product placed in the cart.
    pub product_id: String,
    /// Number of units requested.
    pub quantity: i32,
    /// Timestamp for when the item was added.
    pub created_at: NaiveDateTime,
    /// Product details, present when the item was loaded together with its product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Payload required to add a product to a customer's cart.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub customer_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

impl NewCartItem {
    pub fn new(
        customer_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            quantity,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
