//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ProductRepository`] - Product CRUD operations
//! - [`WarehouseRepository`] - Warehouse CRUD operations
//! - [`InventoryRepository`] - Inventory CRUD plus the by-product lookup

pub mod inventory_repository;
pub mod product_repository;
pub mod warehouse_repository;

pub use inventory_repository::InventoryRepository;
pub use product_repository::ProductRepository;
pub use warehouse_repository::WarehouseRepository;

#[cfg(test)]
pub use inventory_repository::MockInventoryRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use warehouse_repository::MockWarehouseRepository;
