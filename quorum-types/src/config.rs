//! Configuration types shared across the orchestrator and connectors.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorKey;
use crate::market::Market;

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Bounded retry policy for a single upstream HTTP call.
///
/// The policy is plain data so it can be configured, serialized, and tested
/// in isolation from the call site that executes it. Defaults mirror the one
/// endpoint that historically needed retrying: five attempts, exponential
/// backoff from 100 ms, retry only on transient 5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the second attempt; later delays grow by `factor`.
    pub base_delay: Duration,
    /// Exponential factor applied per additional attempt (>= 1).
    pub factor: u32,
    /// Upper bound on any single backoff delay.
    pub max_delay: Duration,
    /// HTTP statuses that are worth retrying.
    pub retry_on: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
            factor: 2,
            max_delay: Duration::from_secs(10),
            retry_on: vec![500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            retry_on: Vec::new(),
            ..Self::default()
        }
    }

    /// Whether a response with this status should be retried.
    #[must_use]
    pub fn should_retry(&self, status: u16) -> bool {
        self.retry_on.contains(&status)
    }

    /// Backoff delay to sleep after the given failed attempt (1-based).
    ///
    /// Grows as `base_delay * factor^(attempt - 1)`, capped at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let scaled = self
            .base_delay
            .saturating_mul(self.factor.max(1).saturating_pow(exp));
        scaled.min(self.max_delay)
    }
}

/// Global configuration for the `Quorum` orchestrator.
#[derive(Debug, Clone)]
pub struct QuorumConfig {
    /// Preferred connector order per market; connectors not listed keep their
    /// registration order after the listed ones. Unknown keys are dropped
    /// during the orchestrator's build step.
    pub per_market_priority: HashMap<Market, Vec<ConnectorKey>>,
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for operations that aggregate multiple
    /// provider calls (e.g. the scorecard assembly).
    pub request_timeout: Option<Duration>,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            per_market_priority: HashMap::new(),
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}
