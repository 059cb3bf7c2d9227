//! quorum-yahoo
//!
//! Connector that implements `QuorumConnector` on top of the Yahoo Finance
//! quoteSummary API, mapping the officer roster into a leadership record and
//! surfacing the provider's total ESG score.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// quoteSummary response models.
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;

use adapter::{RealAdapter, YahooProfile};
use quorum_core::connector::{ConnectorKey, LeadershipProvider, QuorumConnector};
use quorum_core::{Leadership, Market, QuorumError, Ticker};

use crate::models::QuoteSummaryResult;

/// Public connector type. Production users construct with
/// [`YahooConnector::new_default`].
pub struct YahooConnector {
    profile: Arc<dyn YahooProfile>,
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("quorum-yahoo");

    /// Build with a fresh production adapter inside.
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            profile: Arc::new(RealAdapter::new_default()),
        }
    }

    /// Build from a pre-configured adapter (custom endpoints, shared client).
    #[must_use]
    pub fn new_with_adapter(adapter: RealAdapter) -> Self {
        Self {
            profile: Arc::new(adapter),
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(adapter: Arc<dyn YahooProfile>) -> Self {
        Self { profile: adapter }
    }

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: QuorumError, what: &str) -> QuorumError {
        match e {
            QuorumError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    QuorumError::not_found(what.to_string())
                } else {
                    QuorumError::connector("quorum-yahoo", msg)
                }
            }
            QuorumError::Other(msg) => QuorumError::connector("quorum-yahoo", msg),
            other => other,
        }
    }

    /// Map a quoteSummary result into a leadership record.
    ///
    /// The first listed officer is taken as the CEO and the first officer whose
    /// title mentions "Chairman" as the chairman; titled officers form the
    /// board. An absent or empty roster produces an all-missing record rather
    /// than an error.
    fn map_leadership(result: &QuoteSummaryResult) -> Leadership {
        let officers = result
            .asset_profile
            .as_ref()
            .map(|p| p.company_officers.as_slice())
            .unwrap_or_default();

        let board: Vec<String> = officers
            .iter()
            .filter(|o| o.title.as_deref().is_some_and(|t| !t.is_empty()))
            .filter_map(|o| o.name.clone())
            .collect();

        let ceo = officers.first().and_then(|o| o.name.clone());
        let chairman = officers
            .iter()
            .find(|o| o.title.as_deref().is_some_and(|t| t.contains("Chairman")))
            .and_then(|o| o.name.clone());

        let esg_total = result
            .esg_scores
            .as_ref()
            .and_then(|s| s.total_esg.as_ref())
            .and_then(|v| v.raw);

        Leadership {
            ceo,
            chairman,
            board,
            esg_total,
        }
    }
}

#[async_trait]
impl LeadershipProvider for YahooConnector {
    async fn leadership(&self, ticker: &Ticker) -> Result<Leadership, QuorumError> {
        let symbol = ticker.symbol();
        let raw = self
            .profile
            .quote_summary(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("leadership for {symbol}")))?;
        Ok(Self::map_leadership(&raw))
    }
}

#[async_trait]
impl QuorumConnector for YahooConnector {
    fn name(&self) -> &'static str {
        "quorum-yahoo"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn supports_market(&self, _market: Market) -> bool {
        true
    }

    fn as_leadership_provider(&self) -> Option<&dyn LeadershipProvider> {
        Some(self as &dyn LeadershipProvider)
    }
}
