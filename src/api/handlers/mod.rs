//! HTTP request handlers for API endpoints.

pub mod health;
pub mod products;

pub use health::health_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, update_product_handler,
};
