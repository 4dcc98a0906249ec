//! One-shot loader that inserts a product catalogue into the store.
//!
//! Usage: `import-products [FILE]` where FILE is a `.json` or `.csv` catalogue
//! (defaults to `products.json`).

use std::path::PathBuf;

use dotenvy::dotenv;

use storefront_api::config::ServerConfig;
use storefront_api::db::establish_connection_pool;
use storefront_api::forms::products::read_products_file;
use storefront_api::repository::DieselRepository;
use storefront_api::services::products::import_products;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("products.json"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let records = match read_products_file(&path) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url, &config.pool) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let summary = import_products(&repo, records);
    log::info!(
        "Imported {} product(s) from {}, {} failed",
        summary.imported,
        path.display(),
        summary.failed
    );
}
