#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use quorum_core::connector::{
    DisclosuresProvider, EsgProvider, LeadershipProvider, QuorumConnector, TranslationProvider,
};
use quorum_core::{
    EsgBreakdown, Leadership, Market, QuorumError, ReportBundle, Ticker, TranslationRequest,
};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// You can tailor behavior (success/fail, covered markets, latency) via the
/// builder below; a capability is advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub markets: Option<Vec<Market>>,
    pub delay_ms: u64,

    pub leadership_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<Leadership, QuorumError> + Send + Sync>>,
    pub esg_fn: Option<Arc<dyn Fn(&Ticker) -> Result<EsgBreakdown, QuorumError> + Send + Sync>>,
    pub disclosures_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<ReportBundle, QuorumError> + Send + Sync>>,
    pub translate_fn:
        Option<Arc<dyn Fn(&TranslationRequest) -> Result<String, QuorumError> + Send + Sync>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            markets: None,
            delay_ms: 0,
            leadership_fn: None,
            esg_fn: None,
            disclosures_fn: None,
            translate_fn: None,
        }
    }
}

#[async_trait]
impl LeadershipProvider for MockConnector {
    async fn leadership(&self, t: &Ticker) -> Result<Leadership, QuorumError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.leadership_fn {
            return (f)(t);
        }
        Err(QuorumError::unsupported("leadership"))
    }
}

#[async_trait]
impl EsgProvider for MockConnector {
    async fn esg(&self, t: &Ticker) -> Result<EsgBreakdown, QuorumError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.esg_fn {
            return (f)(t);
        }
        Err(QuorumError::unsupported("esg"))
    }
}

#[async_trait]
impl DisclosuresProvider for MockConnector {
    async fn disclosures(&self, t: &Ticker) -> Result<ReportBundle, QuorumError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.disclosures_fn {
            return (f)(t);
        }
        Err(QuorumError::unsupported("disclosures"))
    }
}

#[async_trait]
impl TranslationProvider for MockConnector {
    async fn translate(&self, req: &TranslationRequest) -> Result<String, QuorumError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.translate_fn {
            return (f)(req);
        }
        Err(QuorumError::unsupported("translation"))
    }
}

#[async_trait]
impl QuorumConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_market(&self, market: Market) -> bool {
        self.markets.as_ref().is_none_or(|m| m.contains(&market))
    }

    fn as_leadership_provider(&self) -> Option<&dyn LeadershipProvider> {
        if self.leadership_fn.is_some() {
            Some(self as &dyn LeadershipProvider)
        } else {
            None
        }
    }

    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        if self.esg_fn.is_some() {
            Some(self as &dyn EsgProvider)
        } else {
            None
        }
    }

    fn as_disclosures_provider(&self) -> Option<&dyn DisclosuresProvider> {
        if self.disclosures_fn.is_some() {
            Some(self as &dyn DisclosuresProvider)
        } else {
            None
        }
    }

    fn as_translation_provider(&self) -> Option<&dyn TranslationProvider> {
        if self.translate_fn.is_some() {
            Some(self as &dyn TranslationProvider)
        } else {
            None
        }
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder {
            inner: Self::default(),
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn markets(mut self, markets: &[Market]) -> Self {
        self.inner.markets = Some(markets.to_vec());
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.inner.delay_ms = delay_ms;
        self
    }

    pub fn leadership_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<Leadership, QuorumError> + Send + Sync + 'static,
    {
        self.inner.leadership_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_leadership_ok(self, record: Leadership) -> Self {
        self.leadership_fn(move |_| Ok(record.clone()))
    }

    pub fn returns_leadership_err(self, err: QuorumError) -> Self {
        self.leadership_fn(move |_| Err(err.clone()))
    }

    pub fn esg_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<EsgBreakdown, QuorumError> + Send + Sync + 'static,
    {
        self.inner.esg_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_esg_ok(self, breakdown: EsgBreakdown) -> Self {
        self.esg_fn(move |_| Ok(breakdown.clone()))
    }

    pub fn returns_esg_err(self, err: QuorumError) -> Self {
        self.esg_fn(move |_| Err(err.clone()))
    }

    pub fn disclosures_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker) -> Result<ReportBundle, QuorumError> + Send + Sync + 'static,
    {
        self.inner.disclosures_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_disclosures_ok(self, bundle: ReportBundle) -> Self {
        self.disclosures_fn(move |_| Ok(bundle.clone()))
    }

    pub fn returns_disclosures_err(self, err: QuorumError) -> Self {
        self.disclosures_fn(move |_| Err(err.clone()))
    }

    pub fn translate_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&TranslationRequest) -> Result<String, QuorumError> + Send + Sync + 'static,
    {
        self.inner.translate_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_translation_err(self, err: QuorumError) -> Self {
        self.translate_fn(move |_| Err(err.clone()))
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(self.inner)
    }
}
