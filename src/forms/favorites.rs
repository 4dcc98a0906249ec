use serde::Deserialize;
use validator::Validate;

use crate::domain::favorite::NewFavorite;
use crate::forms::{FormResult, required};

/// Payload accepted when saving a product as a favorite.
#[derive(Debug, Deserialize, Validate)]
pub struct AddFavoriteForm {
    #[serde(default, alias = "customerId")]
    #[validate(length(min = 1, message = "customer_id is required"))]
    pub customer_id: String,
    #[serde(default, alias = "productId")]
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
}

impl AddFavoriteForm {
    /// Validates the payload into a domain `NewFavorite`.
    pub fn into_new_favorite(self) -> FormResult<NewFavorite> {
        self.validate()?;

        Ok(NewFavorite::new(
            required(self.customer_id, "customer_id")?,
            required(self.product_id, "product_id")?,
        ))
    }
}
