use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::{CartItem as DomainCartItem, NewCartItem as DomainNewCartItem};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cart)]
pub struct CartItem {
    pub id: String,
    pub customer_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart)]
pub struct NewCartItem<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub product_id: &'a str,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

impl From<CartItem> for DomainCartItem {
    fn from(value: CartItem) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
            created_at: value.created_at,
            product: None,
        }
    }
}

impl From<(CartItem, Product)> for DomainCartItem {
    fn from((item, product): (CartItem, Product)) -> Self {
        let mut domain = DomainCartItem::from(item);
        domain.product = Some(product.into());
        domain
    }
}

impl<'a> NewCartItem<'a> {
    pub fn from_domain(id: &'a str, value: &'a DomainNewCartItem) -> Self {
        Self {
            id,
            customer_id: value.customer_id.as_str(),
            product_id: value.product_id.as_str(),
            quantity: value.quantity,
            created_at: value.created_at,
        }
    }
}
