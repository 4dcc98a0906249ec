use diesel::prelude::*;

use crate::{
    domain::favorite::{Favorite as DomainFavorite, NewFavorite as DomainNewFavorite},
    models::favorite::{Favorite as DbFavorite, NewFavorite as DbNewFavorite},
    models::product::Product as DbProduct,
    repository::errors::RepositoryResult,
    repository::{DieselRepository, FavoriteReader, FavoriteWriter, new_id},
};

impl FavoriteReader for DieselRepository {
    fn list_favorites(&self, customer_id: &str) -> RepositoryResult<Vec<DomainFavorite>> {
        use crate::schema::{favorites, products};

        let mut conn = self.conn()?;
        let rows = favorites::table
            .inner_join(products::table)
            .filter(favorites::customer_id.eq(customer_id))
            .order(favorites::created_at.desc())
            .select((DbFavorite::as_select(), DbProduct::as_select()))
            .load::<(DbFavorite, DbProduct)>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl FavoriteWriter for DieselRepository {
    fn create_favorite(
        &self,
        new_favorite: &DomainNewFavorite,
    ) -> RepositoryResult<DomainFavorite> {
        use crate::schema::{favorites, products};

        let mut conn = self.conn()?;
        let id = new_id();
        let db_new = DbNewFavorite::from_domain(&id, new_favorite);

        let created = diesel::insert_into(favorites::table)
            .values(&db_new)
            .get_result::<DbFavorite>(&mut conn)?;
        let product = products::table
            .find(&created.product_id)
            .first::<DbProduct>(&mut conn)?;

        Ok((created, product).into())
    }
}
