//! Infrastructure layer: database access, caching, and resilience policies.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`cache`] - Read-through entity cache
//! - [`resilience`] - Circuit-breaker policy for outbound calls

pub mod cache;
pub mod persistence;
pub mod resilience;
