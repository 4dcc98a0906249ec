use mockall::mock;

use super::{
    CartReader, CartWriter, FavoriteReader, FavoriteWriter, OrderReader, OrderWriter,
    ProductReader, ProductWriter,
};
use crate::domain::{
    cart::{CartItem, NewCartItem},
    favorite::{Favorite, NewFavorite},
    order::{NewOrder, Order},
    product::{NewProduct, Product, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: &str, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub FavoriteReader {}

    impl FavoriteReader for FavoriteReader {
        fn list_favorites(&self, customer_id: &str) -> RepositoryResult<Vec<Favorite>>;
    }
}

mock! {
    pub FavoriteWriter {}

    impl FavoriteWriter for FavoriteWriter {
        fn create_favorite(&self, new_favorite: &NewFavorite) -> RepositoryResult<Favorite>;
    }
}

mock! {
    pub CartReader {}

    impl CartReader for CartReader {
        fn list_cart_items(&self, customer_id: &str) -> RepositoryResult<Vec<CartItem>>;
    }
}

mock! {
    pub CartWriter {}

    impl CartWriter for CartWriter {
        fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn list_orders(&self, customer_id: &str) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }
}
