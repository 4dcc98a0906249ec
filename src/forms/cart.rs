use serde::Deserialize;
use validator::Validate;

use crate::domain::cart::NewCartItem;
use crate::forms::{FormResult, required};

/// Payload accepted when adding a product to a cart.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCartItemForm {
    #[serde(default, alias = "customerId")]
    #[validate(length(min = 1, message = "customer_id is required"))]
    pub customer_id: String,
    #[serde(default, alias = "productId")]
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
    pub quantity: i32,
}

impl AddCartItemForm {
    /// Validates the payload into a domain `NewCartItem`.
    pub fn into_new_cart_item(self) -> FormResult<NewCartItem> {
        self.validate()?;

        Ok(NewCartItem::new(
            required(self.customer_id, "customer_id")?,
            required(self.product_id, "product_id")?,
            self.quantity,
        ))
    }
}
