//! HTTP routing for the JSON API.

use actix_web::http::Method;
use actix_web::http::header::ContentType;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpResponse, Resource, error, web};

use crate::services::{ServiceError, ServiceResult};

pub mod cart;
pub mod favorites;
pub mod health;
pub mod orders;
pub mod products;

/// Register every API resource under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config()).service(
        web::scope("/api")
            .wrap(cors_headers())
            .service(
                resource("/products")
                    .route(web::get().to(products::list_products))
                    .route(web::post().to(products::create_product))
                    .route(web::put().to(products::update_product))
                    .route(web::delete().to(products::delete_product)),
            )
            .service(
                resource("/favorites")
                    .route(web::get().to(favorites::list_favorites))
                    .route(web::post().to(favorites::add_favorite)),
            )
            .service(
                resource("/cart")
                    .route(web::get().to(cart::show_cart))
                    .route(web::post().to(cart::add_to_cart)),
            )
            .service(
                resource("/orders")
                    .route(web::get().to(orders::list_orders))
                    .route(web::post().to(orders::create_order)),
            )
            .service(resource("/health").route(web::get().to(health::health_check))),
    );
}

/// Permissive CORS headers attached to every API response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, DELETE, OPTIONS",
        ))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// A resource that answers preflight requests and rejects unrouted verbs with 405.
fn resource(path: &str) -> Resource {
    web::resource(path)
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type(ContentType::plaintext())
        .body("method not allowed")
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(message.into())
}

/// Run blocking repository work off the async workers.
pub(crate) async fn run_blocking<T, F>(job: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(job)
        .await
        .map_err(|err| ServiceError::Internal(err.to_string()))?
}

/// Translate a service failure into a plain-text response.
///
/// Store details are logged and never sent to the client.
pub(crate) fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => bad_request(message),
        ServiceError::NotFound => HttpResponse::NotFound()
            .content_type(ContentType::plaintext())
            .body("not found"),
        ServiceError::Transaction(_) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("order could not be created")
        }
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("failed to {action}"))
        }
    }
}
