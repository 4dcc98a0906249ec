use actix_web::{HttpResponse, Responder, web};

use crate::forms::orders::CreateOrderForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::CustomerQuery;
use crate::services::orders as orders_service;

/// `GET /api/orders?customer_id=...`
pub async fn list_orders(
    repo: web::Data<DieselRepository>,
    params: web::Query<CustomerQuery>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let query = params.into_inner();

    match run_blocking(move || orders_service::list_orders(&repo, query)).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => error_response(err, "list orders"),
    }
}

/// `POST /api/orders`
pub async fn create_order(
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let form = form.into_inner();

    match run_blocking(move || orders_service::place_order(&repo, form)).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response(err, "create order"),
    }
}
