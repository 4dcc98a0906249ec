use diesel::prelude::*;

use crate::{
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{DieselRepository, ProductReader, ProductWriter, new_id},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let items = products::table
            .order(products::created_at.desc())
            .load::<DbProduct>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let id = new_id();
        let db_new = DbNewProduct::from_domain(&id, new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: &str,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: &str) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(products::table.filter(products::id.eq(product_id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
