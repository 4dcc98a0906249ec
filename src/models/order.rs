use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderLine as DomainNewOrderLine, Order as DomainOrder,
    OrderLine as DomainOrderLine, OrderStatus, UnknownOrderStatus,
};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub status: String,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders_products)]
pub struct OrderLine {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub status: &'static str,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders_products)]
pub struct NewOrderLine<'a> {
    pub id: &'a str,
    pub order_id: &'a str,
    pub product_id: &'a str,
    pub quantity: i32,
    pub price: f64,
}

impl Order {
    pub fn into_domain(
        self,
        lines: Vec<(OrderLine, Product)>,
    ) -> Result<DomainOrder, UnknownOrderStatus> {
        Ok(DomainOrder {
            status: OrderStatus::try_from(self.status.as_str())?,
            id: self.id,
            customer_id: self.customer_id,
            total_price: self.total_price,
            created_at: self.created_at,
            items: lines.into_iter().map(DomainOrderLine::from).collect(),
        })
    }
}

impl From<(OrderLine, Product)> for DomainOrderLine {
    fn from((line, product): (OrderLine, Product)) -> Self {
        Self {
            id: line.id,
            order_id: line.order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            price: line.price,
            product: Some(product.into()),
        }
    }
}

impl<'a> NewOrder<'a> {
    /// Insert row for a freshly placed order; the status is always `new`.
    pub fn from_domain(id: &'a str, value: &'a DomainNewOrder) -> Self {
        Self {
            id,
            customer_id: value.customer_id.as_str(),
            status: OrderStatus::New.into(),
            total_price: value.total_price,
            created_at: value.created_at,
        }
    }
}

impl<'a> NewOrderLine<'a> {
    pub fn from_domain(id: &'a str, order_id: &'a str, value: &'a DomainNewOrderLine) -> Self {
        Self {
            id,
            order_id,
            product_id: value.product_id.as_str(),
            quantity: value.quantity,
            price: value.price,
        }
    }
}
