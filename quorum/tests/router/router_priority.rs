use std::sync::Arc;

use quorum::Quorum;
use quorum_core::{Leadership, Market, QuorumConnector};

use crate::helpers::{MockConnector, ticker};

fn named_leadership(name: &str) -> Leadership {
    Leadership {
        ceo: Some(name.to_string()),
        ..Leadership::default()
    }
}

#[tokio::test]
async fn per_market_priority_is_applied() {
    let low: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("low")
        .returns_leadership_ok(named_leadership("from-low"))
        .build();
    let high: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("high")
        .returns_leadership_ok(named_leadership("from-high"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer_for_market(Market::UsSec, &[high, low])
        .build()
        .unwrap();

    let lead = quorum.leadership(&ticker("MSFT", Market::UsSec)).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("from-high"));
}

#[tokio::test]
async fn priority_only_reorders_its_own_market() {
    let low: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("low")
        .returns_leadership_ok(named_leadership("from-low"))
        .build();
    let high: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("high")
        .returns_leadership_ok(named_leadership("from-high"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer_for_market(Market::ChinaAShares, &[high, low])
        .build()
        .unwrap();

    // US market keeps registration order.
    let lead = quorum.leadership(&ticker("MSFT", Market::UsSec)).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("from-low"));
}

#[tokio::test]
async fn unknown_priority_keys_are_dropped_at_build_time() {
    let registered: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("registered")
        .returns_leadership_ok(named_leadership("from-registered"))
        .build();
    let stranger: Arc<dyn QuorumConnector> = MockConnector::builder()
        .name("stranger")
        .returns_leadership_ok(named_leadership("from-stranger"))
        .build();

    // `stranger` is listed in the priority but never registered.
    let quorum = Quorum::builder()
        .with_connector(registered.clone())
        .prefer_for_market(Market::UsSec, &[stranger, registered])
        .build()
        .unwrap();

    let lead = quorum.leadership(&ticker("MSFT", Market::UsSec)).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("from-registered"));
}
