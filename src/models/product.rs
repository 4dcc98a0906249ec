use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image_url: value.image_url,
            description: value.description,
            price: value.price,
            created_at: value.created_at,
        }
    }
}

impl<'a> NewProduct<'a> {
    pub fn from_domain(id: &'a str, value: &'a DomainNewProduct) -> Self {
        Self {
            id,
            name: value.name.as_str(),
            image_url: value.image_url.as_deref(),
            description: value.description.as_deref(),
            price: value.price,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
            description: value.description.as_deref(),
            image_url: value.image_url.as_deref(),
        }
    }
}
