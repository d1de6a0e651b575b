//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries and `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgProductRepository`] - Product storage and retrieval
//! - [`PgWarehouseRepository`] - Warehouse storage and retrieval
//! - [`PgInventoryRepository`] - Inventory storage plus the by-product lookup

pub mod pg_inventory_repository;
pub mod pg_product_repository;
pub mod pg_warehouse_repository;

pub use pg_inventory_repository::PgInventoryRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_warehouse_repository::PgWarehouseRepository;
