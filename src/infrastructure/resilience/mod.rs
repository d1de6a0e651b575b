//! Resilience policies for outbound calls.
//!
//! Currently a single building block: a failure-rate [`CircuitBreaker`].
//! No call site in this service wraps an operation with it yet; it is
//! constructed from configuration and carried in [`crate::state::AppState`]
//! so any outbound call can opt in.

mod circuit_breaker;

pub use circuit_breaker::{
    BreakerState, CircuitBreaker, CircuitBreakerConfig, CircuitBreakerError,
};
