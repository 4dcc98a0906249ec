use crate::domain::cart::CartItem;
use crate::forms::cart::AddCartItemForm;
use crate::repository::{CartReader, CartWriter};
use crate::services::{CustomerQuery, ServiceError, ServiceResult};

/// Lists the cart contents of a customer, with product details.
pub fn load_cart<R>(repo: &R, query: CustomerQuery) -> ServiceResult<Vec<CartItem>>
where
    R: CartReader + ?Sized,
{
    let customer_id = query.require_customer_id()?;

    repo.list_cart_items(&customer_id)
        .map_err(ServiceError::from)
}

/// Adds a product to a customer's cart.
pub fn add_to_cart<R>(repo: &R, form: AddCartItemForm) -> ServiceResult<CartItem>
where
    R: CartWriter + ?Sized,
{
    let new_item = form.into_new_cart_item()?;

    repo.add_cart_item(&new_item).map_err(ServiceError::from)
}
