use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront_api::config::ServerConfig;
use storefront_api::db::establish_connection_pool;
use storefront_api::repository::DieselRepository;
use storefront_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
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

    log::info!(
        "Starting server on {}:{} (pool: {} open, {} idle, {}s lifetime)",
        config.address,
        config.port,
        config.pool.max_open,
        config.pool.max_idle,
        config.pool.max_lifetime.as_secs()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
