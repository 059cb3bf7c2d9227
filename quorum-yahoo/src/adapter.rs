#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header;
use tokio::sync::Mutex;
use tracing::debug;

use quorum_core::QuorumError;

use crate::models::{QuoteSummaryEnvelope, QuoteSummaryResult};

const DEFAULT_API_BASE: &str = "https://query1.finance.yahoo.com";
const DEFAULT_AUTH_BASE: &str = "https://fc.yahoo.com";
const CONNECTOR: &str = "quorum-yahoo";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Profile abstraction (so we can inject fixtures in tests).
#[async_trait]
pub trait YahooProfile: Send + Sync {
    /// Fetch the quoteSummary modules for `symbol`.
    async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummaryResult, QuorumError>;
}

#[cfg(feature = "test-adapters")]
impl dyn YahooProfile {
    /// Build an adapter from a plain closure (requires the `test-adapters`
    /// feature).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooProfile>
    where
        F: Fn(&str) -> Result<QuoteSummaryResult, QuorumError> + Send + Sync + 'static,
    {
        struct FnAdapter<F>(F);

        #[async_trait]
        impl<F> YahooProfile for FnAdapter<F>
        where
            F: Fn(&str) -> Result<QuoteSummaryResult, QuorumError> + Send + Sync,
        {
            async fn quote_summary(
                &self,
                symbol: &str,
            ) -> Result<QuoteSummaryResult, QuorumError> {
                (self.0)(symbol)
            }
        }

        Arc::new(FnAdapter(f))
    }
}

#[derive(Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Real adapter speaking to the quoteSummary API over a shared `reqwest` client.
///
/// The API requires a session cookie plus a "crumb" token; both are fetched
/// lazily on the first call and reused until the API rejects them.
pub struct RealAdapter {
    client: reqwest::Client,
    api_base: String,
    auth_base: String,
    crumb: Mutex<Option<CrumbData>>,
}

impl RealAdapter {
    /// Build an adapter against the production endpoints.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new_with_endpoints(DEFAULT_API_BASE, DEFAULT_AUTH_BASE)
    }

    /// Build an adapter against custom endpoints (used by HTTP-mock tests).
    pub fn new_with_endpoints(api_base: impl Into<String>, auth_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            auth_base: auth_base.into(),
            crumb: Mutex::new(None),
        }
    }

    async fn crumb(&self) -> Result<CrumbData, QuorumError> {
        {
            let guard = self.crumb.lock().await;
            if let Some(data) = guard.as_ref() {
                return Ok(data.clone());
            }
        }
        self.fetch_crumb().await
    }

    async fn fetch_crumb(&self) -> Result<CrumbData, QuorumError> {
        // Step 1: session cookie.
        let response = self
            .client
            .get(&self.auth_base)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("cookie request failed: {e}")))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| QuorumError::connector(CONNECTOR, "missing session cookie"))?;

        // Step 2: crumb bound to that cookie.
        let crumb = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.api_base))
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("crumb request failed: {e}")))?
            .text()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("crumb read failed: {e}")))?;

        let data = CrumbData { cookie, crumb };
        *self.crumb.lock().await = Some(data.clone());
        Ok(data)
    }

    async fn clear_crumb(&self) {
        *self.crumb.lock().await = None;
    }
}

#[async_trait]
impl YahooProfile for RealAdapter {
    async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummaryResult, QuorumError> {
        let auth = self.crumb().await?;
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=assetProfile,esgScores&crumb={}",
            self.api_base, symbol, auth.crumb
        );
        debug!(symbol, "yahoo quoteSummary request");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &auth.cookie)
            .send()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Stale crumb; drop it so the next call re-authenticates.
            self.clear_crumb().await;
            return Err(QuorumError::connector(CONNECTOR, "authentication rejected"));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(QuorumError::not_found(format!("profile for {symbol}")));
        }
        if !status.is_success() {
            return Err(QuorumError::status(CONNECTOR, status.as_u16()));
        }

        let envelope: QuoteSummaryEnvelope = response
            .json()
            .await
            .map_err(|e| QuorumError::Data(format!("quoteSummary parse failed: {e}")))?;

        envelope
            .quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| QuorumError::not_found(format!("profile for {symbol}")))
    }
}
