use quorum_core::{Capability, EsgBreakdown, QuorumError, Ticker};

use crate::Quorum;

impl Quorum {
    /// Fetch the ESG sub-score breakdown for a ticker.
    ///
    /// Notes: scoring methodologies vary by provider; values are surfaced as-is
    /// without cross-provider normalization.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    pub async fn esg(&self, ticker: &Ticker) -> Result<EsgBreakdown, QuorumError> {
        self.fetch_single(ticker, Capability::Esg, "esg", move |c, t| {
            if !c.supports_market(t.market()) {
                return None;
            }
            c.as_esg_provider()?;
            Some(async move {
                match c.as_esg_provider() {
                    Some(p) => p.esg(&t).await,
                    None => Err(QuorumError::connector(
                        c.name(),
                        "missing esg capability during call",
                    )),
                }
            })
        })
        .await
    }
}
