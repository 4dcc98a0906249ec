use std::thread::sleep;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use storefront_api::domain::order::{NewOrder, NewOrderLine, OrderStatus};
use storefront_api::domain::product::UpdateProduct;
use storefront_api::repository::{
    CartReader, OrderReader, OrderWriter, ProductWriter, RepositoryError,
};
use storefront_api::schema::{orders, orders_products};

mod common;

fn stored_rows(test_db: &common::TestDb) -> (i64, i64) {
    let mut conn = test_db.pool().get().unwrap();
    let orders = orders::table.count().get_result::<i64>(&mut conn).unwrap();
    let lines = orders_products::table
        .count()
        .get_result::<i64>(&mut conn)
        .unwrap();
    (orders, lines)
}

#[test]
fn test_create_order_records_lines_and_clears_cart() {
    let test_db = common::TestDb::new("test_create_order_clears_cart.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let bob = common::seed_customer(&repo, "bob@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 25.0);
    let chair = common::seed_product(&repo, "Chair", 80.0);
    let rug = common::seed_product(&repo, "Rug", 40.0);

    common::seed_cart_item(&repo, &alice, &lamp, 2);
    common::seed_cart_item(&repo, &alice, &chair, 1);
    // Not part of the order; the whole cart is emptied anyway.
    common::seed_cart_item(&repo, &alice, &rug, 3);
    common::seed_cart_item(&repo, &bob, &lamp, 1);

    let order = repo
        .create_order(
            &NewOrder::new(alice.id.as_str(), 130.0)
                .with_item(NewOrderLine::new(lamp.id.as_str(), 2, 25.0))
                .with_item(NewOrderLine::new(chair.id.as_str(), 1, 80.0)),
        )
        .unwrap();

    assert_eq!(order.customer_id, alice.id);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.total_price, 130.0);
    assert_eq!(order.items.len(), 2);
    for line in &order.items {
        assert_eq!(line.order_id, order.id);
        assert!(!line.id.is_empty());
        let product = line.product.as_ref().expect("product is embedded");
        assert_eq!(product.id, line.product_id);
    }
    let lamp_line = order
        .items
        .iter()
        .find(|line| line.product_id == lamp.id)
        .unwrap();
    assert_eq!(lamp_line.quantity, 2);
    assert_eq!(lamp_line.price, 25.0);

    assert!(repo.list_cart_items(&alice.id).unwrap().is_empty());
    assert_eq!(repo.list_cart_items(&bob.id).unwrap().len(), 1);

    let stored = repo.list_orders(&alice.id).unwrap();
    assert_eq!(stored.len(), 1);
    let stored = &stored[0];
    assert_eq!(stored.id, order.id);
    assert_eq!(stored.items.len(), 2);
    assert_eq!(stored_rows(&test_db), (1, 2));
}

#[test]
fn test_create_order_with_empty_cart_and_no_lines() {
    let test_db = common::TestDb::new("test_create_order_no_lines.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");

    let order = repo
        .create_order(&NewOrder::new(alice.id.as_str(), 0.0))
        .unwrap();

    assert!(order.items.is_empty());
    assert_eq!(stored_rows(&test_db), (1, 0));
}

#[test]
fn test_failing_line_rolls_back_everything() {
    let test_db = common::TestDb::new("test_failing_line_rolls_back.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 25.0);
    let chair = common::seed_product(&repo, "Chair", 80.0);

    common::seed_cart_item(&repo, &alice, &lamp, 2);
    common::seed_cart_item(&repo, &alice, &chair, 1);

    let err = repo
        .create_order(
            &NewOrder::new(alice.id.as_str(), 150.0)
                .with_item(NewOrderLine::new(lamp.id.as_str(), 2, 25.0))
                .with_item(NewOrderLine::new(chair.id.as_str(), 1, 80.0))
                .with_item(NewOrderLine::new("no-such-product", 1, 20.0)),
        )
        .expect_err("expected unknown product to abort the order");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    assert_eq!(stored_rows(&test_db), (0, 0));
    assert!(repo.list_orders(&alice.id).unwrap().is_empty());
    assert_eq!(repo.list_cart_items(&alice.id).unwrap().len(), 2);
}

#[test]
fn test_rejected_quantity_rolls_back_everything() {
    let test_db = common::TestDb::new("test_rejected_quantity_rolls_back.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 25.0);
    let chair = common::seed_product(&repo, "Chair", 80.0);

    common::seed_cart_item(&repo, &alice, &lamp, 1);

    let result = repo.create_order(
        &NewOrder::new(alice.id.as_str(), 25.0)
            .with_item(NewOrderLine::new(lamp.id.as_str(), 1, 25.0))
            .with_item(NewOrderLine::new(chair.id.as_str(), 0, 80.0)),
    );

    assert!(result.is_err());
    assert_eq!(stored_rows(&test_db), (0, 0));
    assert_eq!(repo.list_cart_items(&alice.id).unwrap().len(), 1);
}

#[test]
fn test_failing_cart_clear_rolls_back_order_and_lines() {
    let test_db = common::TestDb::new("test_failing_cart_clear.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 25.0);

    common::seed_cart_item(&repo, &alice, &lamp, 2);

    {
        let mut conn = test_db.pool().get().unwrap();
        conn.batch_execute(
            "CREATE TRIGGER lock_cart BEFORE DELETE ON cart \
             BEGIN SELECT RAISE(ABORT, 'cart is locked'); END;",
        )
        .unwrap();
    }

    let result = repo.create_order(
        &NewOrder::new(alice.id.as_str(), 50.0)
            .with_item(NewOrderLine::new(lamp.id.as_str(), 2, 25.0)),
    );

    assert!(result.is_err());
    assert_eq!(stored_rows(&test_db), (0, 0));
    assert_eq!(repo.list_cart_items(&alice.id).unwrap().len(), 1);
}

#[test]
fn test_unknown_customer_writes_nothing() {
    let test_db = common::TestDb::new("test_unknown_customer.db");
    let repo = test_db.repo();
    let lamp = common::seed_product(&repo, "Lamp", 25.0);

    let err = repo
        .create_order(
            &NewOrder::new("ghost", 25.0).with_item(NewOrderLine::new(lamp.id.as_str(), 1, 25.0)),
        )
        .expect_err("expected unknown customer to fail");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert_eq!(stored_rows(&test_db), (0, 0));
}

#[test]
fn test_line_price_is_a_purchase_snapshot() {
    let test_db = common::TestDb::new("test_line_price_snapshot.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 10.0);

    let order = repo
        .create_order(
            &NewOrder::new(alice.id.as_str(), 10.0)
                .with_item(NewOrderLine::new(lamp.id.as_str(), 1, 10.0)),
        )
        .unwrap();

    repo.update_product(&lamp.id, &UpdateProduct::new("Lamp", 15.0))
        .unwrap();

    let reloaded = repo.list_orders(&alice.id).unwrap();
    assert_eq!(reloaded[0].id, order.id);
    let line = &reloaded[0].items[0];
    assert_eq!(line.price, 10.0);
    assert_eq!(line.product.as_ref().unwrap().price, 15.0);
}

#[test]
fn test_product_on_an_order_cannot_be_deleted() {
    let test_db = common::TestDb::new("test_ordered_product_delete.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 10.0);

    repo.create_order(
        &NewOrder::new(alice.id.as_str(), 10.0)
            .with_item(NewOrderLine::new(lamp.id.as_str(), 1, 10.0)),
    )
    .unwrap();

    let err = repo
        .delete_product(&lamp.id)
        .expect_err("expected referenced product to stay");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_list_orders_newest_first() {
    let test_db = common::TestDb::new("test_list_orders_newest_first.db");
    let repo = test_db.repo();
    let alice = common::seed_customer(&repo, "alice@example.com");
    let bob = common::seed_customer(&repo, "bob@example.com");
    let lamp = common::seed_product(&repo, "Lamp", 10.0);

    let mut placed = Vec::new();
    for quantity in 1..=3 {
        let order = repo
            .create_order(
                &NewOrder::new(alice.id.as_str(), 10.0 * f64::from(quantity))
                    .with_item(NewOrderLine::new(lamp.id.as_str(), quantity, 10.0)),
            )
            .unwrap();
        placed.push(order.id);
        sleep(Duration::from_millis(5));
    }

    let listed = repo.list_orders(&alice.id).unwrap();
    let ids: Vec<String> = listed.iter().map(|order| order.id.clone()).collect();
    placed.reverse();
    assert_eq!(ids, placed);
    assert_eq!(listed[0].items.len(), 1);
    assert_eq!(listed[0].items[0].quantity, 3);
    assert_eq!(listed[2].items[0].quantity, 1);

    assert!(repo.list_orders(&bob.id).unwrap().is_empty());
}
