use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::Product;

/// Possible lifecycle states of an order.
///
/// Orders are always created as [`OrderStatus::New`]; the remaining states
/// belong to fulfilment collaborators.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has just been placed.
    #[default]
    New,
    /// Order is being prepared.
    Processing,
    /// Order has left the warehouse.
    Shipped,
    /// Order reached the customer.
    Delivered,
    /// Order has been cancelled and should not be processed further.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        value.as_str()
    }
}

/// Raised when a stored status does not name a known lifecycle state.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(pub String);

impl TryFrom<&str> for OrderStatus {
    type Error = UnknownOrderStatus;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "new" => Ok(OrderStatus::New),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Domain representation of a placed order together with its lines.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: String,
    /// Customer who placed the order.
    pub customer_id: String,
    /// Current lifecycle status of the order.
    pub status: OrderStatus,
    /// Total supplied by the caller when the order was placed.
    pub total_price: f64,
    /// Timestamp for when the order record was created.
    pub created_at: NaiveDateTime,
    /// Purchased lines.
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// Purchase-time snapshot of one product in an order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderLine {
    /// Unique identifier of the line.
    pub id: String,
    /// Order the line belongs to.
    pub order_id: String,
    /// Purchased product identifier.
    pub product_id: String,
    /// Number of units purchased.
    pub quantity: i32,
    /// Unit price recorded at purchase time.
    pub price: f64,
    /// Current product details, present when loaded together with the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Payload required to place a new order.
///
/// Carries no status: new orders always start as [`OrderStatus::New`].
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Customer placing the order.
    pub customer_id: String,
    /// Total supplied by the caller. Not checked against the lines.
    pub total_price: f64,
    /// Requested lines in input order.
    pub items: Vec<NewOrderLine>,
    /// Timestamp captured when the order payload was created.
    pub created_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload with no lines and the current timestamp.
    pub fn new(customer_id: impl Into<String>, total_price: f64) -> Self {
        Self {
            customer_id: customer_id.into(),
            total_price,
            items: Vec::new(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Append a requested line to the order payload.
    pub fn with_item(mut self, item: NewOrderLine) -> Self {
        self.items.push(item);
        self
    }
}

/// A requested line of a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

impl NewOrderLine {
    pub fn new(product_id: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }
}
