// storefront_app/src/models/mod.rs

pub mod order;
pub mod product;

pub use order::{NewOrder, Order, OrderItem};
pub use product::Product;
