//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Product`] - A catalog product
//! - [`Warehouse`] - A physical location holding stock
//! - [`Inventory`] - Stock of a product at a warehouse
//!
//! # Design Pattern
//!
//! Creation inputs are separate structs ([`NewProduct`], [`NewWarehouse`],
//! [`NewInventory`]) so entity ids stay store-assigned and immutable.

pub mod inventory;
pub mod product;
pub mod warehouse;

pub use inventory::{Inventory, NewInventory};
pub use product::{NewProduct, Product};
pub use warehouse::{NewWarehouse, Warehouse};
