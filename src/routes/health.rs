use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::repository::DieselRepository;

/// `GET /api/health`: 200 when the database answers, 503 otherwise.
pub async fn health_check(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match web::block(move || repo.ping()).await {
        Ok(Ok(())) => HttpResponse::Ok().json(json!({ "status": "ok" })),
        Ok(Err(err)) => {
            log::error!("Health check failed: {err}");
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
        }
        Err(err) => {
            log::error!("Health check could not run: {err}");
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
        }
    }
}
