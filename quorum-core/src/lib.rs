//! quorum-core
//!
//! Core traits and domain logic shared across the quorum ecosystem.
//!
//! - `connector`: the `QuorumConnector` trait and capability provider traits.
//! - `score`: the pure governance-score heuristic and chart coercion helpers.
//! - `sentinel`: the explicit missing-value sentinel and rendering helpers.
#![warn(missing_docs)]

/// Connector capability traits and the primary `QuorumConnector` interface.
pub mod connector;
/// The governance-score heuristic and bounded gauge coercion.
pub mod score;
/// Missing-value sentinel handling.
pub mod sentinel;

pub use connector::QuorumConnector;
pub use score::{governance_score, gauge_value};
pub use sentinel::{SENTINEL, or_sentinel};

pub use quorum_types::{
    Capability, ConnectorKey, DisclosureReport, EsgBreakdown, FetchStrategy, LanguagePair,
    Leadership, Market, QuorumConfig, QuorumError, ReportBundle, RetryPolicy, ScorecardReport,
    Ticker, TranslationRequest, ZH_CN_TO_EN,
};
