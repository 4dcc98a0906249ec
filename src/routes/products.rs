use actix_web::{HttpResponse, Responder, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::products::{self as products_service, ProductIdQuery};

/// `GET /api/products`
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || products_service::list_products(&repo)).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(err, "list products"),
    }
}

/// `POST /api/products`
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = form.into_inner();

    match run_blocking(move || products_service::create_product(&repo, form)).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "create product"),
    }
}

/// `PUT /api/products`
pub async fn update_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = form.into_inner();

    match run_blocking(move || products_service::update_product(&repo, form)).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "update product"),
    }
}

/// `DELETE /api/products?id=...`
pub async fn delete_product(
    repo: web::Data<DieselRepository>,
    params: web::Query<ProductIdQuery>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let query = params.into_inner();

    match run_blocking(move || products_service::delete_product(&repo, query)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete product"),
    }
}
