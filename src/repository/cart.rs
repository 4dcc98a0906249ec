use diesel::prelude::*;

use crate::{
    domain::cart::{CartItem as DomainCartItem, NewCartItem as DomainNewCartItem},
    models::cart::{CartItem as DbCartItem, NewCartItem as DbNewCartItem},
    models::product::Product as DbProduct,
    repository::errors::RepositoryResult,
    repository::{CartReader, CartWriter, DieselRepository, new_id},
};

impl CartReader for DieselRepository {
    fn list_cart_items(&self, customer_id: &str) -> RepositoryResult<Vec<DomainCartItem>> {
        use crate::schema::{cart, products};

        let mut conn = self.conn()?;
        let rows = cart::table
            .inner_join(products::table)
            .filter(cart::customer_id.eq(customer_id))
            .order(cart::created_at.asc())
            .select((DbCartItem::as_select(), DbProduct::as_select()))
            .load::<(DbCartItem, DbProduct)>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl CartWriter for DieselRepository {
    fn add_cart_item(&self, new_item: &DomainNewCartItem) -> RepositoryResult<DomainCartItem> {
        use crate::schema::{cart, products};

        let mut conn = self.conn()?;
        let id = new_id();
        let db_new = DbNewCartItem::from_domain(&id, new_item);

        let created = diesel::insert_into(cart::table)
            .values(&db_new)
            .get_result::<DbCartItem>(&mut conn)?;
        let product = products::table
            .find(&created.product_id)
            .first::<DbProduct>(&mut conn)?;

        Ok((created, product).into())
    }
}
