//! Report envelopes produced by the orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuorumError;
use crate::records::{EsgBreakdown, Leadership, ReportBundle};
use crate::ticker::Ticker;

/// Best-effort scorecard for one ticker.
///
/// Carries whatever each source produced, the heuristic governance score
/// derived from the leadership record, and any non-fatal warnings encountered
/// while building the report. A failing source never fails the report; its
/// payload stays `None` and an actionable warning is recorded instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardReport {
    /// Requested ticker (market included).
    pub ticker: Ticker,
    /// Officer/board composition, if the provider answered.
    pub leadership: Option<Leadership>,
    /// ESG sub-score breakdown, if the scoring API answered.
    pub esg: Option<EsgBreakdown>,
    /// Scraped disclosures; absent for markets without disclosure sources.
    pub disclosures: Option<ReportBundle>,
    /// Heuristic governance score in `[0, 100]`, recomputed on every fetch.
    pub score: u8,
    /// When the report was assembled.
    pub as_of: DateTime<Utc>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<QuorumError>,
}
