//! Quorum orchestrates corporate-governance data requests across multiple
//! providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `quorum_core` contracts.
//! - Applies per-market priorities to influence provider order.
//! - Supports configurable fetch strategies with per-provider timeouts.
//! - Normalizes error handling and exposes uniform domain types from
//!   `quorum_core`.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, per-provider timeout,
//!     aggregates errors; fewer concurrent requests but potentially higher
//!     latency.
//!   - `Latency`: races eligible providers; lowest tail latency but higher
//!     request fanout.
//! - Scorecard assembly: sources are fetched concurrently and composed
//!   best-effort; a failing source degrades into a warning plus missing-value
//!   sentinels instead of failing the action.
//! - Market gating: connectors advertise which markets they cover, so
//!   disclosure scraping only runs for markets that have disclosure sources.
//!
//! Examples
//! Building an orchestrator and fetching a scorecard:
//! ```rust,ignore
//! use std::sync::Arc;
//! use quorum::Quorum;
//! use quorum_core::{Market, Ticker};
//!
//! let yahoo = Arc::new(quorum_yahoo::YahooConnector::new_default());
//! let finnhub = Arc::new(quorum_finnhub::FinnhubConnector::new(
//!     quorum_finnhub::FinnhubConfig::from_env()?,
//! ));
//!
//! let quorum = Quorum::builder()
//!     .with_connector(yahoo)
//!     .with_connector(finnhub)
//!     .build()?;
//!
//! let ticker = Ticker::new("MSFT", Market::UsSec)?;
//! let report = quorum.scorecard(&ticker).await?;
//! println!("governance score: {}/100", report.score);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Quorum, QuorumBuilder};
pub use crate::router::collapse_errors;

// Re-export core types for convenience
pub use quorum_core::{
    Capability,
    ConnectorKey,
    DisclosureReport,
    EsgBreakdown,
    FetchStrategy,
    LanguagePair,
    Leadership,
    Market,
    QuorumConfig,
    QuorumConnector,
    QuorumError,
    ReportBundle,
    RetryPolicy,
    ScorecardReport,
    Ticker,
    TranslationRequest,
    ZH_CN_TO_EN,
    gauge_value,
    governance_score,
    or_sentinel,
    SENTINEL,
};
