use diesel::prelude::*;

use crate::{
    domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer},
    models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer},
    repository::errors::RepositoryResult,
    repository::{CustomerReader, CustomerWriter, DieselRepository, new_id},
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: &str) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &DomainNewCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let id = new_id();
        let db_new = DbNewCustomer::from_domain(&id, new_customer);

        let created = diesel::insert_into(customers::table)
            .values(&db_new)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }
}
