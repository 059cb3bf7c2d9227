use quorum_core::{Capability, QuorumError, TranslationRequest};

use crate::Quorum;
use crate::core::tag_err;
use crate::router::collapse_errors;

impl Quorum {
    /// Translate free text through the registered translation providers.
    ///
    /// Behavior: translation is not market-gated; providers are tried in
    /// registration order with the per-provider timeout applied, and the first
    /// successful translation wins.
    ///
    /// # Errors
    /// Returns an error if every provider fails or none support the capability.
    pub async fn translate(&self, req: &TranslationRequest) -> Result<String, QuorumError> {
        let mut attempted_any = false;
        let mut errors: Vec<QuorumError> = Vec::new();

        for c in &self.connectors {
            let Some(p) = c.as_translation_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                Capability::Translation,
                self.cfg.provider_timeout,
                p.translate(req),
            )
            .await
            {
                Ok(text) => return Ok(text),
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        Err(collapse_errors(
            Capability::Translation,
            attempted_any,
            errors,
            None,
        ))
    }
}
