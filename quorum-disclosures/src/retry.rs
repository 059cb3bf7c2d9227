//! Bounded-retry execution for a single GET request.
//!
//! The policy itself is plain data ([`RetryPolicy`]); this module owns the
//! attempt loop so the policy can be exercised against a mock server without
//! dragging in any connector logic.

use reqwest::header;
use tracing::warn;

use quorum_core::{QuorumError, RetryPolicy};

/// Browser-like user agent required by the scraped sites.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Issue a GET request, retrying retryable statuses under the given policy.
///
/// Each attempt sends the same request with the [`USER_AGENT`] override. A
/// response whose status is in the policy's retryable set is retried after the
/// policy's backoff delay until attempts run out; any other non-success status
/// and all transport errors fail immediately.
///
/// # Errors
/// - `Status` for the last retryable status once attempts are exhausted, and
///   for any non-retryable non-success status.
/// - `Connector` for transport-level failures.
pub async fn get_with_retry(
    client: &reqwest::Client,
    connector: &'static str,
    url: &str,
    policy: &RetryPolicy,
) -> Result<reqwest::Response, QuorumError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let response = client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuorumError::provider_timeout(connector, "disclosures")
                } else {
                    QuorumError::connector(connector, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        if policy.should_retry(code) && attempt < attempts {
            let delay = policy.delay_for(attempt);
            warn!(url, status = code, attempt, "retryable status, backing off");
            tokio::time::sleep(delay).await;
            attempt += 1;
            continue;
        }

        return Err(QuorumError::status(connector, code));
    }
}
