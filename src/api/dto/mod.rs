//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. The response
//! shapes are flat and decoupled from the storage entities.

pub mod health;
pub mod product;
