use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::favorite::{Favorite as DomainFavorite, NewFavorite as DomainNewFavorite};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct Favorite {
    pub id: String,
    pub customer_id: String,
    pub product_id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub product_id: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Favorite> for DomainFavorite {
    fn from(value: Favorite) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            created_at: value.created_at,
            product: None,
        }
    }
}

impl From<(Favorite, Product)> for DomainFavorite {
    fn from((favorite, product): (Favorite, Product)) -> Self {
        let mut domain = DomainFavorite::from(favorite);
        domain.product = Some(product.into());
        domain
    }
}

impl<'a> NewFavorite<'a> {
    pub fn from_domain(id: &'a str, value: &'a DomainNewFavorite) -> Self {
        Self {
            id,
            customer_id: value.customer_id.as_str(),
            product_id: value.product_id.as_str(),
            created_at: value.created_at,
        }
    }
}
