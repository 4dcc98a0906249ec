use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder},
    models::order::{
        NewOrder as DbNewOrder, NewOrderLine as DbNewOrderLine, Order as DbOrder,
        OrderLine as DbOrderLine,
    },
    models::product::Product as DbProduct,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, OrderReader, OrderWriter, new_id},
};

impl OrderReader for DieselRepository {
    fn list_orders(&self, customer_id: &str) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let db_orders = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .order(orders::created_at.desc())
            .load::<DbOrder>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<String> = db_orders.iter().map(|order| order.id.clone()).collect();
        let mut lines_by_order = load_order_lines(&mut conn, &order_ids)?;

        db_orders
            .into_iter()
            .map(|order| {
                let lines = lines_by_order.remove(&order.id).unwrap_or_default();
                order.into_domain(lines).map_err(RepositoryError::from)
            })
            .collect()
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{cart, orders, orders_products};

        let mut conn = self.conn()?;

        // Commits only when the closure returns Ok; any error or panic rolls back.
        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let customer_id = new_order.customer_id.as_str();
            let order_id = new_id();

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder::from_domain(&order_id, new_order))
                .get_result::<DbOrder>(conn)
                .inspect_err(|err| {
                    log::error!("Failed to insert order for customer {customer_id}: {err}")
                })?;

            for (position, item) in new_order.items.iter().enumerate() {
                let line_id = new_id();
                diesel::insert_into(orders_products::table)
                    .values(&DbNewOrderLine::from_domain(&line_id, &order_id, item))
                    .execute(conn)
                    .inspect_err(|err| {
                        log::error!(
                            "Failed to insert line {position} (product {}) of order {order_id}: {err}",
                            item.product_id
                        )
                    })?;
            }

            let cleared = diesel::delete(cart::table.filter(cart::customer_id.eq(customer_id)))
                .execute(conn)
                .inspect_err(|err| {
                    log::error!("Failed to clear cart of customer {customer_id}: {err}")
                })?;
            log::debug!("Cleared {cleared} cart item(s) of customer {customer_id}");

            let mut lines = load_order_lines(conn, std::slice::from_ref(&order_id))?;
            let lines = lines.remove(&order_id).unwrap_or_default();

            Ok(created.into_domain(lines)?)
        })
    }
}

fn load_order_lines(
    conn: &mut SqliteConnection,
    order_ids: &[String],
) -> RepositoryResult<HashMap<String, Vec<(DbOrderLine, DbProduct)>>> {
    use crate::schema::{orders_products, products};

    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = orders_products::table
        .inner_join(products::table)
        .filter(orders_products::order_id.eq_any(order_ids))
        .select((DbOrderLine::as_select(), DbProduct::as_select()))
        .load::<(DbOrderLine, DbProduct)>(conn)?;

    let mut map: HashMap<String, Vec<(DbOrderLine, DbProduct)>> = HashMap::new();
    for (line, product) in rows {
        map.entry(line.order_id.clone())
            .or_default()
            .push((line, product));
    }

    Ok(map)
}
