pub mod cart;
pub mod customer;
pub mod favorite;
pub mod order;
pub mod product;
