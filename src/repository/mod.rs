use diesel::RunQueryDsl;

use crate::db::{DbConnection, DbPool};
use crate::domain::{
    cart::{CartItem, NewCartItem},
    customer::{Customer, NewCustomer},
    favorite::{Favorite, NewFavorite},
    order::{NewOrder, Order},
    product::{NewProduct, Product, UpdateProduct},
};

pub mod cart;
pub mod customer;
pub mod errors;
pub mod favorite;
pub mod order;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Check that a pooled connection can be acquired and answers a trivial query.
    pub fn ping(&self) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}

/// Fresh identifier for a new row.
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: &str, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over customer records.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;
}

/// Write operations over customer records.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
}

/// Read-only operations over saved products.
pub trait FavoriteReader {
    fn list_favorites(&self, customer_id: &str) -> RepositoryResult<Vec<Favorite>>;
}

/// Write operations over saved products.
pub trait FavoriteWriter {
    fn create_favorite(&self, new_favorite: &NewFavorite) -> RepositoryResult<Favorite>;
}

/// Read-only operations over cart contents.
pub trait CartReader {
    fn list_cart_items(&self, customer_id: &str) -> RepositoryResult<Vec<CartItem>>;
}

/// Write operations over cart contents.
pub trait CartWriter {
    fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
}

/// Read-only operations over placed orders.
pub trait OrderReader {
    /// Orders of `customer_id`, newest first, each with its lines.
    fn list_orders(&self, customer_id: &str) -> RepositoryResult<Vec<Order>>;
}

/// Order placement.
pub trait OrderWriter {
    /// Record the order and its lines and empty the customer's cart in one transaction.
    ///
    /// Any failure leaves the store untouched.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}
