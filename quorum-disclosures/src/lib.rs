//! quorum-disclosures
//!
//! Connector that scrapes free-text governance disclosures from two fixed
//! regional sources: the Sina Finance per-ticker governance page and the CSRC
//! regulations bulletin. Each source degrades independently into an
//! explanatory message inside the bundle, so one unreachable site never hides
//! the other.
#![warn(missing_docs)]

/// Bounded-retry GET execution.
pub mod retry;
/// Tolerant HTML extraction helpers.
pub mod scrape;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use quorum_core::connector::{ConnectorKey, DisclosuresProvider, QuorumConnector};
use quorum_core::{
    DisclosureReport, Market, QuorumError, ReportBundle, RetryPolicy, Ticker,
};

const DEFAULT_SINA_BASE: &str = "https://finance.sina.com.cn";
const DEFAULT_CSRC_BASE: &str = "https://www.csrc.gov.cn";
const CSRC_BULLETIN_PATH: &str = "/pub/newsite/flb/flfg/";
const CONNECTOR: &str = "quorum-disclosures";

/// Display name of the Sina Finance source.
pub const SINA_SOURCE: &str = "Sina Finance Report";
/// Display name of the CSRC source.
pub const CSRC_SOURCE: &str = "China SEC Report";

const SINA_PARAGRAPHS: usize = 3;
const CSRC_EXCERPT_CHARS: usize = 500;

/// Connector configuration: source base URLs, retry policy, request timeout.
#[derive(Debug, Clone)]
pub struct DisclosureConfig {
    /// Sina Finance base URL; override for HTTP-mock tests.
    pub sina_base: String,
    /// CSRC base URL; override for HTTP-mock tests.
    pub csrc_base: String,
    /// Retry policy applied to every source request.
    pub retry: RetryPolicy,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            sina_base: DEFAULT_SINA_BASE.to_string(),
            csrc_base: DEFAULT_CSRC_BASE.to_string(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl DisclosureConfig {
    /// Override both base URLs (used by HTTP-mock tests).
    #[must_use]
    pub fn with_base_urls(
        mut self,
        sina_base: impl Into<String>,
        csrc_base: impl Into<String>,
    ) -> Self {
        self.sina_base = sina_base.into();
        self.csrc_base = csrc_base.into();
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Public connector type for the regional disclosure sources.
pub struct DisclosureConnector {
    client: reqwest::Client,
    config: DisclosureConfig,
}

impl DisclosureConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("quorum-disclosures");

    /// Build a connector against the production sources.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(DisclosureConfig::default())
    }

    /// Build a connector from an explicit configuration.
    #[must_use]
    pub fn new(config: DisclosureConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }

    async fn fetch_sina(&self, ticker: &Ticker) -> Result<String, QuorumError> {
        let url = format!(
            "{}/stock/governance/{}.shtml",
            self.config.sina_base,
            ticker.symbol().to_ascii_lowercase()
        );
        debug!(%url, "fetching sina governance page");
        let html = retry::get_with_retry(&self.client, CONNECTOR, &url, &self.config.retry)
            .await?
            .text()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("body read failed: {e}")))?;

        scrape::first_paragraphs(&html, SINA_PARAGRAPHS)
            .ok_or_else(|| QuorumError::Data("no governance paragraphs found".to_string()))
    }

    async fn fetch_csrc(&self) -> Result<String, QuorumError> {
        let url = format!("{}{}", self.config.csrc_base, CSRC_BULLETIN_PATH);
        debug!(%url, "fetching csrc bulletin page");
        let html = retry::get_with_retry(&self.client, CONNECTOR, &url, &self.config.retry)
            .await?
            .text()
            .await
            .map_err(|e| QuorumError::connector(CONNECTOR, format!("body read failed: {e}")))?;

        scrape::content_div_excerpt(&html, CSRC_EXCERPT_CHARS)
            .ok_or_else(|| QuorumError::Data("bulletin content block missing".to_string()))
    }
}

#[async_trait]
impl DisclosuresProvider for DisclosureConnector {
    async fn disclosures(&self, ticker: &Ticker) -> Result<ReportBundle, QuorumError> {
        let mut reports = Vec::with_capacity(2);

        let sina_text = match self.fetch_sina(ticker).await {
            Ok(text) => text,
            Err(e) => format!("Error fetching Sina Finance report: {e}"),
        };
        reports.push(DisclosureReport {
            source: SINA_SOURCE.to_string(),
            text: sina_text,
            translated: false,
        });

        let csrc_text = match self.fetch_csrc().await {
            Ok(text) => text,
            Err(e) => format!("Could not fetch China SEC report: {e}"),
        };
        reports.push(DisclosureReport {
            source: CSRC_SOURCE.to_string(),
            text: csrc_text,
            translated: false,
        });

        Ok(ReportBundle { reports })
    }
}

#[async_trait]
impl QuorumConnector for DisclosureConnector {
    fn name(&self) -> &'static str {
        "quorum-disclosures"
    }

    fn vendor(&self) -> &'static str {
        "Sina Finance / CSRC"
    }

    fn supports_market(&self, market: Market) -> bool {
        matches!(market, Market::ChinaAShares | Market::TaiwanTsec)
    }

    fn as_disclosures_provider(&self) -> Option<&dyn DisclosuresProvider> {
        Some(self as &dyn DisclosuresProvider)
    }
}
