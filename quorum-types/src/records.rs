//! Flat domain records produced by connectors.

use serde::{Deserialize, Serialize};

use crate::LanguagePair;

/// Officer and board composition for a ticker, as reported by the
/// financial-data provider.
///
/// Missing upstream fields stay `None`; callers render them with an explicit
/// sentinel rather than failing. Produced once per fetch and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leadership {
    /// Chief executive officer, when identified.
    pub ceo: Option<String>,
    /// Board chairman, when identified.
    pub chairman: Option<String>,
    /// Named, titled board members in provider order.
    pub board: Vec<String>,
    /// Provider-level total ESG score, when published.
    pub esg_total: Option<f64>,
}

/// ESG sub-score breakdown from the scoring API.
///
/// Each field is independently optional; non-numeric upstream values coerce to
/// `None` at parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EsgBreakdown {
    /// Environment pillar score.
    pub environment: Option<f64>,
    /// Social pillar score.
    pub social: Option<f64>,
    /// Governance pillar score.
    pub governance: Option<f64>,
}

/// A single scraped disclosure, keyed by its source name.
///
/// When the source could not be fetched, `text` holds an explanatory message
/// in place of the disclosure body; the bundle as a whole still succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureReport {
    /// Display name of the source (e.g. "Sina Finance Report").
    pub source: String,
    /// Disclosure text, an explanatory error message, or a translation of
    /// either.
    pub text: String,
    /// Whether `text` went through a translation pass.
    pub translated: bool,
}

/// Ordered collection of disclosure reports for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBundle {
    /// Reports in source order.
    pub reports: Vec<DisclosureReport>,
}

impl ReportBundle {
    /// True when no source produced a report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// A translation request: free text plus the fixed language pair to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate.
    pub text: String,
    /// Source/target language codes.
    pub languages: LanguagePair,
}

impl TranslationRequest {
    /// Build a request for the given text and language pair.
    pub fn new(text: impl Into<String>, languages: LanguagePair) -> Self {
        Self {
            text: text.into(),
            languages,
        }
    }
}
