use actix_web::{HttpResponse, Responder, web};

use crate::forms::favorites::AddFavoriteForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::CustomerQuery;
use crate::services::favorites as favorites_service;

/// `GET /api/favorites?customer_id=...`
pub async fn list_favorites(
    repo: web::Data<DieselRepository>,
    params: web::Query<CustomerQuery>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let query = params.into_inner();

    match run_blocking(move || favorites_service::list_favorites(&repo, query)).await {
        Ok(favorites) => HttpResponse::Ok().json(favorites),
        Err(err) => error_response(err, "list favorites"),
    }
}

/// `POST /api/favorites`
pub async fn add_favorite(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddFavoriteForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = form.into_inner();

    match run_blocking(move || favorites_service::add_favorite(&repo, form)).await {
        Ok(favorite) => HttpResponse::Ok().json(favorite),
        Err(err) => error_response(err, "add favorite"),
    }
}
