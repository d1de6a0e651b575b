//! Failure-rate circuit breaker.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

/// Circuit breaker tuning knobs.
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Fraction of failed calls in the rolling window that opens the
    /// breaker, in `(0.0, 1.0]`.
    pub failure_rate_threshold: f64,
    /// How long the breaker stays open before admitting a half-open probe.
    pub open_duration: Duration,
    /// Number of most recent call outcomes considered.
    pub window_size: usize,
    /// Minimum outcomes recorded before the failure rate is evaluated.
    pub min_calls: usize,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_rate_threshold: 0.5,
            open_duration: Duration::from_secs(10),
            window_size: 100,
            min_calls: 10,
        }
    }
}

/// Observable breaker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

/// Error returned by [`CircuitBreaker::call`].
#[derive(Debug, Error)]
pub enum CircuitBreakerError<E: std::error::Error> {
    /// The breaker rejected the call without invoking the operation.
    #[error("circuit breaker is open")]
    Open,
    /// The operation ran and failed; the failure was recorded.
    #[error(transparent)]
    Inner(E),
}

struct BreakerInner {
    /// Rolling window of recent outcomes, `true` for a failure.
    window: VecDeque<bool>,
    open_until: Option<Instant>,
    /// Set while a half-open probe is in flight; only one probe is admitted.
    probing: bool,
}

/// Circuit breaker over a rolling window of call outcomes.
///
/// Closed until the failure rate over the last `window_size` calls reaches
/// `failure_rate_threshold` (evaluated once `min_calls` outcomes exist).
/// While open, calls are rejected without touching the wrapped dependency.
/// After `open_duration` a single probe call is admitted: success closes the
/// breaker and resets the window, failure reopens it.
///
/// This is a reusable policy object; wrap an outbound call either with
/// [`CircuitBreaker::call`] or manually via [`CircuitBreaker::try_acquire`]
/// plus [`CircuitBreaker::record_success`] / [`CircuitBreaker::record_failure`].
pub struct CircuitBreaker {
    cfg: CircuitBreakerConfig,
    inner: Mutex<BreakerInner>,
}

impl CircuitBreaker {
    pub fn new(cfg: CircuitBreakerConfig) -> Self {
        Self {
            cfg,
            inner: Mutex::new(BreakerInner {
                window: VecDeque::new(),
                open_until: None,
                probing: false,
            }),
        }
    }

    /// Runs `op` under the breaker policy.
    ///
    /// # Errors
    ///
    /// - [`CircuitBreakerError::Open`] when the breaker rejects the call
    /// - [`CircuitBreakerError::Inner`] when `op` itself fails
    pub async fn call<T, E, F, Fut>(&self, op: F) -> Result<T, CircuitBreakerError<E>>
    where
        E: std::error::Error,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.try_acquire().await {
            return Err(CircuitBreakerError::Open);
        }

        match op().await {
            Ok(value) => {
                self.record_success().await;
                Ok(value)
            }
            Err(e) => {
                self.record_failure().await;
                Err(CircuitBreakerError::Inner(e))
            }
        }
    }

    /// Returns whether a call may proceed right now.
    ///
    /// Transitions Open → Half-Open when the open duration has elapsed; the
    /// caller admitted at that moment is the probe and must report its
    /// outcome via [`Self::record_success`] or [`Self::record_failure`].
    pub async fn try_acquire(&self) -> bool {
        let mut inner = self.inner.lock().await;

        if let Some(until) = inner.open_until {
            if Instant::now() < until {
                return false;
            }
            // Open duration elapsed: admit exactly one probe.
            inner.open_until = None;
            inner.probing = true;
            metrics::counter!("breaker_half_open_total").increment(1);
            return true;
        }

        // While a probe is in flight, everyone else stays rejected.
        !inner.probing
    }

    /// Records a successful call outcome.
    pub async fn record_success(&self) {
        let mut inner = self.inner.lock().await;

        if inner.probing {
            inner.probing = false;
            inner.window.clear();
            return;
        }

        Self::push_outcome(&mut inner, self.cfg.window_size, false);
    }

    /// Records a failed call outcome, opening the breaker when the failure
    /// rate over the window reaches the threshold.
    pub async fn record_failure(&self) {
        let mut inner = self.inner.lock().await;

        if inner.probing {
            inner.probing = false;
            Self::open(&mut inner, &self.cfg);
            return;
        }

        Self::push_outcome(&mut inner, self.cfg.window_size, true);

        if inner.window.len() >= self.cfg.min_calls {
            let failures = inner.window.iter().filter(|failed| **failed).count();
            let rate = failures as f64 / inner.window.len() as f64;
            if rate >= self.cfg.failure_rate_threshold {
                Self::open(&mut inner, &self.cfg);
            }
        }
    }

    /// Current breaker state.
    pub async fn state(&self) -> BreakerState {
        let inner = self.inner.lock().await;
        if let Some(until) = inner.open_until {
            if Instant::now() < until {
                return BreakerState::Open;
            }
            return BreakerState::HalfOpen;
        }
        if inner.probing {
            return BreakerState::HalfOpen;
        }
        BreakerState::Closed
    }

    fn push_outcome(inner: &mut BreakerInner, window_size: usize, failed: bool) {
        inner.window.push_back(failed);
        while inner.window.len() > window_size {
            inner.window.pop_front();
        }
    }

    fn open(inner: &mut BreakerInner, cfg: &CircuitBreakerConfig) {
        inner.open_until = Some(Instant::now() + cfg.open_duration);
        inner.window.clear();
        metrics::counter!("breaker_open_total").increment(1);
        warn!(
            "Circuit breaker opened for {:?}",
            cfg.open_duration
        );
    }
}
