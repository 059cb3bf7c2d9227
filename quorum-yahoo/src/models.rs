//! Yahoo quoteSummary response models.
//!
//! Only the slices of the `assetProfile` and `esgScores` modules that feed a
//! leadership record are parsed; everything else in the payload is ignored.

use serde::Deserialize;

/// Top-level envelope of the quoteSummary API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryEnvelope {
    /// Response container.
    pub quote_summary: QuoteSummary,
}

/// Response container carrying per-symbol results.
#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    /// One entry per requested symbol; empty when the symbol is unknown.
    #[serde(default)]
    pub result: Vec<QuoteSummaryResult>,
}

/// Requested modules for a single symbol.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    /// Company profile module, when present.
    pub asset_profile: Option<AssetProfile>,
    /// ESG scores module, when present.
    pub esg_scores: Option<EsgScores>,
}

/// The officer roster slice of the `assetProfile` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    /// Company officers in provider order.
    #[serde(default)]
    pub company_officers: Vec<CompanyOfficer>,
}

/// One company officer entry.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOfficer {
    /// Officer name, when published.
    pub name: Option<String>,
    /// Officer title, when published.
    pub title: Option<String>,
}

/// The total-score slice of the `esgScores` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgScores {
    /// Total ESG score as a raw/formatted pair.
    pub total_esg: Option<RawValue>,
}

/// Numeric field shape used throughout quoteSummary: `{"raw": 1.0, "fmt": "1"}`
/// or an empty object when no data is available.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawValue {
    /// Raw numeric value, when present.
    pub raw: Option<f64>,
}
