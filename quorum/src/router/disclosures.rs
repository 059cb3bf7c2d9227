use quorum_core::{Capability, QuorumError, ReportBundle, Ticker};

use crate::Quorum;

impl Quorum {
    /// Fetch scraped governance disclosures for a ticker.
    ///
    /// Behavior: only connectors covering the ticker's market are consulted, so
    /// markets without disclosure sources come back as `Unsupported` rather
    /// than an empty bundle. Individual sources degrade into explanatory text
    /// inside the bundle.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability for this market.
    pub async fn disclosures(&self, ticker: &Ticker) -> Result<ReportBundle, QuorumError> {
        self.fetch_single(ticker, Capability::Disclosures, "disclosures", move |c, t| {
            if !c.supports_market(t.market()) {
                return None;
            }
            c.as_disclosures_provider()?;
            Some(async move {
                match c.as_disclosures_provider() {
                    Some(p) => p.disclosures(&t).await,
                    None => Err(QuorumError::connector(
                        c.name(),
                        "missing disclosures capability during call",
                    )),
                }
            })
        })
        .await
    }
}
