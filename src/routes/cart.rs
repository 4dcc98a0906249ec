use actix_web::{HttpResponse, Responder, web};

use crate::forms::cart::AddCartItemForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::CustomerQuery;
use crate::services::cart as cart_service;

/// `GET /api/cart?customer_id=...`
pub async fn show_cart(
    repo: web::Data<DieselRepository>,
    params: web::Query<CustomerQuery>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let query = params.into_inner();

    match run_blocking(move || cart_service::load_cart(&repo, query)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "load cart"),
    }
}

/// `POST /api/cart`
pub async fn add_to_cart(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCartItemForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = form.into_inner();

    match run_blocking(move || cart_service::add_to_cart(&repo, form)).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, "add to cart"),
    }
}
