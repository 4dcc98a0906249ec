use crate::domain::favorite::Favorite;
use crate::forms::favorites::AddFavoriteForm;
use crate::repository::{FavoriteReader, FavoriteWriter};
use crate::services::{CustomerQuery, ServiceError, ServiceResult};

/// Lists the products a customer saved, with product details.
pub fn list_favorites<R>(repo: &R, query: CustomerQuery) -> ServiceResult<Vec<Favorite>>
where
    R: FavoriteReader + ?Sized,
{
    let customer_id = query.require_customer_id()?;

    repo.list_favorites(&customer_id)
        .map_err(ServiceError::from)
}

/// Saves a product as a favorite of a customer.
pub fn add_favorite<R>(repo: &R, form: AddFavoriteForm) -> ServiceResult<Favorite>
where
    R: FavoriteWriter + ?Sized,
{
    let new_favorite = form.into_new_favorite()?;

    repo.create_favorite(&new_favorite)
        .map_err(ServiceError::from)
}
