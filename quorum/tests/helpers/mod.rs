// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use quorum_core::{Market, Ticker};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Common symbol constants used across tests.
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";
#[allow(dead_code)]
pub const MOUTAI: &str = "600519";

/// Construct a `Ticker` for test usage with infallible expectations.
pub fn ticker(symbol: &str, market: Market) -> Ticker {
    Ticker::new(symbol, market).expect("valid static test symbol")
}

/// A leadership record with a separated CEO/chairman and a five-seat board.
pub fn full_leadership() -> quorum_core::Leadership {
    quorum_core::Leadership {
        ceo: Some("Avery Chief".to_string()),
        chairman: Some("Blair Chair".to_string()),
        board: ["Avery Chief", "Blair Chair", "Casey One", "Drew Two", "Emery Three"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        esg_total: Some(18.0),
    }
}

/// A two-source disclosure bundle with untranslated text.
pub fn raw_bundle() -> quorum_core::ReportBundle {
    quorum_core::ReportBundle {
        reports: vec![
            quorum_core::DisclosureReport {
                source: "Sina Finance Report".to_string(),
                text: "治理报告摘要".to_string(),
                translated: false,
            },
            quorum_core::DisclosureReport {
                source: "China SEC Report".to_string(),
                text: "监管公告摘要".to_string(),
                translated: false,
            },
        ],
    }
}
