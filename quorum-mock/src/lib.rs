use async_trait::async_trait;
use quorum_core::connector::{
    DisclosuresProvider, EsgProvider, LeadershipProvider, QuorumConnector, TranslationProvider,
};
use quorum_core::{
    EsgBreakdown, Leadership, Market, QuorumError, ReportBundle, Ticker, TranslationRequest,
};

mod fixtures;

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> QuorumError {
        QuorumError::not_found(what.to_string())
    }

    fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), QuorumError> {
        match symbol {
            "FAIL" => Err(QuorumError::connector(
                "quorum-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Simulate brief latency; orchestrator may time out depending on config
                // Keep short to avoid slowing tests excessively
                let () = std::thread::sleep(std::time::Duration::from_millis(200));
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl QuorumConnector for MockConnector {
    fn name(&self) -> &'static str {
        "quorum-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_market(&self, _market: Market) -> bool {
        true
    }

    fn as_leadership_provider(&self) -> Option<&dyn LeadershipProvider> {
        Some(self as &dyn LeadershipProvider)
    }
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }
    fn as_disclosures_provider(&self) -> Option<&dyn DisclosuresProvider> {
        Some(self as &dyn DisclosuresProvider)
    }
    fn as_translation_provider(&self) -> Option<&dyn TranslationProvider> {
        Some(self as &dyn TranslationProvider)
    }
}

#[async_trait]
impl LeadershipProvider for MockConnector {
    async fn leadership(&self, ticker: &Ticker) -> Result<Leadership, QuorumError> {
        let s = ticker.symbol();
        Self::maybe_fail_or_timeout(s, "leadership")?;
        fixtures::leadership::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("leadership for {s}")))
    }
}

#[async_trait]
impl EsgProvider for MockConnector {
    async fn esg(&self, ticker: &Ticker) -> Result<EsgBreakdown, QuorumError> {
        let s = ticker.symbol();
        Self::maybe_fail_or_timeout(s, "esg")?;
        fixtures::esg::by_symbol(s).ok_or_else(|| Self::not_found(&format!("esg for {s}")))
    }
}

#[async_trait]
impl DisclosuresProvider for MockConnector {
    async fn disclosures(&self, ticker: &Ticker) -> Result<ReportBundle, QuorumError> {
        let s = ticker.symbol();
        Self::maybe_fail_or_timeout(s, "disclosures")?;
        Ok(fixtures::disclosures::by_symbol(s))
    }
}

#[async_trait]
impl TranslationProvider for MockConnector {
    async fn translate(&self, req: &TranslationRequest) -> Result<String, QuorumError> {
        if req.text.trim().is_empty() {
            return Err(QuorumError::Translation("empty input".to_string()));
        }
        Ok(format!(
            "[{}->{}] {}",
            req.languages.source, req.languages.target, req.text
        ))
    }
}
