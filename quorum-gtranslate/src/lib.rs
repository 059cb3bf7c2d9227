//! quorum-gtranslate
//!
//! Connector that implements `QuorumConnector` on top of the public Google
//! Translate `translate_a/single` endpoint. Used to translate regional
//! disclosure text into the display language; every failure mode maps to a
//! `Translation` error so callers can annotate the affected text slot instead
//! of aborting.
#![warn(missing_docs)]

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use quorum_core::connector::{ConnectorKey, QuorumConnector, TranslationProvider};
use quorum_core::{Market, QuorumError, TranslationRequest};

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";
const TRANSLATE_PATH: &str = "/translate_a/single";

/// Public connector type for the Google Translate web endpoint.
pub struct GoogleTranslateConnector {
    client: reqwest::Client,
    base_url: String,
}

impl Default for GoogleTranslateConnector {
    fn default() -> Self {
        Self::new_default()
    }
}

impl GoogleTranslateConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("quorum-gtranslate");

    /// Build a connector against the production endpoint.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new_with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a connector against a custom endpoint (used by HTTP-mock tests).
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Concatenate the translated segments of a `translate_a/single` payload.
    ///
    /// The endpoint answers with nested arrays rather than a schema; the first
    /// element is a list of `[translated, original, ...]` segments.
    fn join_segments(payload: &Value) -> Result<String, QuorumError> {
        let segments = payload
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| QuorumError::Translation("unexpected payload shape".to_string()))?;

        let text: String = segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(QuorumError::Translation(
                "payload carried no translated segments".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateConnector {
    async fn translate(&self, req: &TranslationRequest) -> Result<String, QuorumError> {
        if req.text.trim().is_empty() {
            return Err(QuorumError::Translation("empty input".to_string()));
        }

        let url = format!("{}{}", self.base_url, TRANSLATE_PATH);
        debug!(
            source = req.languages.source,
            target = req.languages.target,
            chars = req.text.chars().count(),
            "translate request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", req.languages.source),
                ("tl", req.languages.target),
                ("dt", "t"),
                ("q", req.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QuorumError::Translation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuorumError::Translation(format!(
                "endpoint returned status {}",
                status.as_u16()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| QuorumError::Translation(format!("undecodable payload: {e}")))?;

        Self::join_segments(&payload)
    }
}

#[async_trait]
impl QuorumConnector for GoogleTranslateConnector {
    fn name(&self) -> &'static str {
        "quorum-gtranslate"
    }

    fn vendor(&self) -> &'static str {
        "Google Translate"
    }

    fn supports_market(&self, _market: Market) -> bool {
        true
    }

    fn as_translation_provider(&self) -> Option<&dyn TranslationProvider> {
        Some(self as &dyn TranslationProvider)
    }
}
