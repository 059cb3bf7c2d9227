use quorum_core::{Capability, Leadership, QuorumError, Ticker};

use crate::Quorum;

impl Quorum {
    /// Fetch officer/board composition for a ticker.
    ///
    /// Behavior: providers are tried according to the configured strategy and
    /// market priorities; the first successful record wins. Missing fields stay
    /// `None` rather than erroring.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the
    /// capability.
    pub async fn leadership(&self, ticker: &Ticker) -> Result<Leadership, QuorumError> {
        self.fetch_single(ticker, Capability::Leadership, "leadership", move |c, t| {
            if !c.supports_market(t.market()) {
                return None;
            }
            c.as_leadership_provider()?;
            Some(async move {
                match c.as_leadership_provider() {
                    Some(p) => p.leadership(&t).await,
                    None => Err(QuorumError::connector(
                        c.name(),
                        "missing leadership capability during call",
                    )),
                }
            })
        })
        .await
    }
}
