use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            email: value.email,
            name: value.name,
            created_at: value.created_at,
        }
    }
}

impl<'a> NewCustomer<'a> {
    pub fn from_domain(id: &'a str, value: &'a DomainNewCustomer) -> Self {
        Self {
            id,
            email: value.email.as_str(),
            name: value.name.as_str(),
            created_at: value.created_at,
        }
    }
}
