use serde::Deserialize;
use validator::Validate;

use crate::domain::order::{NewOrder, NewOrderLine};
use crate::forms::{FormResult, required};

/// Payload accepted when placing an order.
///
/// Any `status` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderForm {
    #[serde(default, alias = "customerId")]
    #[validate(length(min = 1, message = "customer_id is required"))]
    pub customer_id: String,
    #[serde(alias = "totalPrice")]
    pub total_price: f64,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<CreateOrderLineForm>,
}

/// One requested line of an order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderLineForm {
    #[serde(default, alias = "productId")]
    #[validate(length(min = 1, message = "product_id is required"))]
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

impl CreateOrderForm {
    /// Validates the payload into a domain `NewOrder`, keeping line order.
    pub fn into_new_order(self) -> FormResult<NewOrder> {
        self.validate()?;

        let mut order = NewOrder::new(required(self.customer_id, "customer_id")?, self.total_price);
        for item in self.items {
            order = order.with_item(NewOrderLine::new(
                required(item.product_id, "product_id")?,
                item.quantity,
                item.price,
            ));
        }

        Ok(order)
    }
}
