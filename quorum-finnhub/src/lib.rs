//! quorum-finnhub
//!
//! Connector that implements `QuorumConnector` on top of the Finnhub
//! `/stock/esg` endpoint, providing the ESG sub-score breakdown.
//!
//! Finnhub free tier is limited to 60 API calls per minute.
//! API documentation: <https://finnhub.io/docs/api>
#![warn(missing_docs)]

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use quorum_core::connector::{ConnectorKey, EsgProvider, QuorumConnector};
use quorum_core::{EsgBreakdown, Market, QuorumError, Ticker};

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
const CONNECTOR: &str = "quorum-finnhub";

/// Connector configuration: the injected API credential and the endpoint base.
///
/// The token is resolved by the caller (typically from the environment at
/// startup) and handed in; it is never compiled into this crate.
#[derive(Debug, Clone)]
pub struct FinnhubConfig {
    /// API token sent with every request.
    pub token: String,
    /// Endpoint base URL; override for HTTP-mock tests.
    pub base_url: String,
}

impl FinnhubConfig {
    /// Environment variable the token is conventionally resolved from.
    pub const TOKEN_ENV: &'static str = "FINNHUB_API_KEY";

    /// Build a configuration for the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Resolve the token from [`Self::TOKEN_ENV`].
    ///
    /// # Errors
    /// Returns `InvalidArg` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, QuorumError> {
        match std::env::var(Self::TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(QuorumError::InvalidArg(format!(
                "{} is not set; the Finnhub connector needs an API token",
                Self::TOKEN_ENV
            ))),
        }
    }

    /// Override the endpoint base URL (used by HTTP-mock tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Response from the `/stock/esg` endpoint.
///
/// Score fields are parsed leniently: the endpoint is known to emit numbers,
/// nulls, or placeholder strings depending on coverage, and anything
/// non-numeric must degrade to a missing value rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EsgResponse {
    #[serde(default)]
    environment_score: serde_json::Value,
    #[serde(default)]
    social_score: serde_json::Value,
    #[serde(default)]
    governance_score: serde_json::Value,
}

/// Error payload Finnhub returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

fn lenient_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Public connector type for the Finnhub ESG endpoint.
pub struct FinnhubConnector {
    client: reqwest::Client,
    config: FinnhubConfig,
}

impl FinnhubConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("quorum-finnhub");

    /// Build a connector from an injected configuration.
    #[must_use]
    pub fn new(config: FinnhubConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, QuorumError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(endpoint, "finnhub request");

        let response = self
            .client
            .get(&url)
            .header("X-Finnhub-Token", &self.config.token)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QuorumError::provider_timeout(CONNECTOR, "esg")
                } else {
                    QuorumError::connector(CONNECTOR, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(QuorumError::connector(
                CONNECTOR,
                "invalid or missing API token",
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body)
                && let Some(msg) = err.error
            {
                return Err(QuorumError::connector(CONNECTOR, msg));
            }
            return Err(QuorumError::status(CONNECTOR, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("body read failed: {e}")))
    }
}

#[async_trait]
impl EsgProvider for FinnhubConnector {
    async fn esg(&self, ticker: &Ticker) -> Result<EsgBreakdown, QuorumError> {
        let text = self.fetch("/stock/esg", &[("symbol", ticker.symbol())]).await?;

        let parsed: EsgResponse = serde_json::from_str(&text)
            .map_err(|e| QuorumError::Data(format!("esg parse failed: {e}")))?;

        Ok(EsgBreakdown {
            environment: lenient_number(&parsed.environment_score),
            social: lenient_number(&parsed.social_score),
            governance: lenient_number(&parsed.governance_score),
        })
    }
}

#[async_trait]
impl QuorumConnector for FinnhubConnector {
    fn name(&self) -> &'static str {
        "quorum-finnhub"
    }

    fn vendor(&self) -> &'static str {
        "Finnhub"
    }

    fn supports_market(&self, _market: Market) -> bool {
        true
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }
}
