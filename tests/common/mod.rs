//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use storefront_api::db::{DbPool, PoolConfig, establish_connection_pool};
use storefront_api::domain::cart::{CartItem, NewCartItem};
use storefront_api::domain::customer::{Customer, NewCustomer};
use storefront_api::domain::product::{NewProduct, Product};
use storefront_api::repository::{CartWriter, CustomerWriter, DieselRepository, ProductWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary migrated database used in integration tests.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let config = PoolConfig {
            max_open: 4,
            max_idle: 1,
            max_lifetime: Duration::from_secs(60),
        };

        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"), &config)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn seed_customer(repo: &DieselRepository, email: &str) -> Customer {
    repo.create_customer(&NewCustomer::new(email, "Test Customer"))
        .expect("create customer")
}

pub fn seed_product(repo: &DieselRepository, name: &str, price: f64) -> Product {
    repo.create_product(&NewProduct::new(name, price))
        .expect("create product")
}

pub fn seed_cart_item(
    repo: &DieselRepository,
    customer: &Customer,
    product: &Product,
    quantity: i32,
) -> CartItem {
    repo.add_cart_item(&NewCartItem::new(
        customer.id.as_str(),
        product.id.as_str(),
        quantity,
    ))
    .expect("add cart item")
}
