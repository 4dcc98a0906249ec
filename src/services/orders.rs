use crate::domain::order::Order;
use crate::forms::orders::CreateOrderForm;
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{CustomerQuery, ServiceError, ServiceResult};

/// Lists the orders of one customer, newest first, with their lines.
pub fn list_orders<R>(repo: &R, query: CustomerQuery) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    let customer_id = query.require_customer_id()?;

    repo.list_orders(&customer_id).map_err(ServiceError::from)
}

/// Places an order: records it with its lines and empties the customer's cart.
///
/// The payload is validated before the store is touched. Every store failure
/// is reported as [`ServiceError::Transaction`]; the repository guarantees
/// that nothing was written in that case.
pub fn place_order<R>(repo: &R, form: CreateOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form.into_new_order()?;

    // total_price is trusted as sent; it is not compared with the line sum.
    let order = repo.create_order(&new_order).map_err(|err| {
        log::error!(
            "Order for customer {} was rolled back: {err}",
            new_order.customer_id
        );
        ServiceError::Transaction(err)
    })?;

    log::info!(
        "Placed order {} for customer {} with {} line(s)",
        order.id,
        order.customer_id,
        order.items.len()
    );

    Ok(order)
}
