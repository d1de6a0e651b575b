//! Business logic services for the application layer.

pub mod inventory_service;
pub mod product_service;
pub mod warehouse_service;

pub use inventory_service::InventoryService;
pub use product_service::ProductService;
pub use warehouse_service::WarehouseService;
