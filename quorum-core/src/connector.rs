use async_trait::async_trait;

use crate::QuorumError;
pub use quorum_types::ConnectorKey;
use quorum_types::{EsgBreakdown, Leadership, Market, ReportBundle, Ticker, TranslationRequest};

/// Focused role trait for connectors that provide officer/board composition.
#[async_trait]
pub trait LeadershipProvider: Send + Sync {
    /// Fetch the leadership record for the given ticker.
    async fn leadership(&self, ticker: &Ticker) -> Result<Leadership, QuorumError>;
}

/// Focused role trait for connectors that provide ESG sub-score breakdowns.
#[async_trait]
pub trait EsgProvider: Send + Sync {
    /// Fetch the ESG breakdown for the given ticker.
    async fn esg(&self, ticker: &Ticker) -> Result<EsgBreakdown, QuorumError>;
}

/// Focused role trait for connectors that scrape governance disclosures.
#[async_trait]
pub trait DisclosuresProvider: Send + Sync {
    /// Fetch the disclosure bundle for the given ticker.
    ///
    /// Individual sources degrade into explanatory text inside the bundle;
    /// the call fails only when no bundle can be produced at all.
    async fn disclosures(&self, ticker: &Ticker) -> Result<ReportBundle, QuorumError>;
}

/// Focused role trait for connectors that translate free text.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate the request text for its fixed language pair.
    async fn translate(&self, req: &TranslationRequest) -> Result<String, QuorumError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait QuorumConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "quorum-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring priorities.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to cover a given market.
    ///
    /// Default: returns `false` for all markets. Connectors must explicitly
    /// override this method to declare coverage.
    fn supports_market(&self, market: Market) -> bool {
        let _ = market;
        false
    }

    /// Advertise leadership capability by returning a usable trait object
    /// reference when supported.
    fn as_leadership_provider(&self) -> Option<&dyn LeadershipProvider> {
        None
    }

    /// If implemented, returns a trait object for ESG breakdowns.
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        None
    }

    /// If implemented, returns a trait object for disclosure scraping.
    fn as_disclosures_provider(&self) -> Option<&dyn DisclosuresProvider> {
        None
    }

    /// If implemented, returns a trait object for translation.
    fn as_translation_provider(&self) -> Option<&dyn TranslationProvider> {
        None
    }
}
