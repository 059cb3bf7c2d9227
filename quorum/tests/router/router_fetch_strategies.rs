use quorum::Quorum;
use quorum_core::{FetchStrategy, Leadership, Market, QuorumError};

use crate::helpers::{MockConnector, ticker};

fn named_leadership(name: &str) -> Leadership {
    Leadership {
        ceo: Some(name.to_string()),
        ..Leadership::default()
    }
}

#[tokio::test]
async fn latency_strategy_returns_the_fastest_success() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay_ms(150)
        .returns_leadership_ok(named_leadership("from-slow"))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_leadership_ok(named_leadership("from-fast"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(slow)
        .with_connector(fast)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let lead = quorum.leadership(&ticker("MSFT", Market::UsSec)).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("from-fast"));
}

#[tokio::test]
async fn latency_strategy_skips_failures_for_a_slower_success() {
    let fast_broken = MockConnector::builder()
        .name("fast_broken")
        .returns_leadership_err(QuorumError::connector("fast_broken", "boom"))
        .build();
    let slow_ok = MockConnector::builder()
        .name("slow_ok")
        .delay_ms(50)
        .returns_leadership_ok(named_leadership("from-slow-ok"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(fast_broken)
        .with_connector(slow_ok)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let lead = quorum.leadership(&ticker("MSFT", Market::UsSec)).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("from-slow-ok"));
}

#[tokio::test]
async fn provider_timeout_is_enforced_per_call() {
    let stuck = MockConnector::builder()
        .name("stuck")
        .delay_ms(500)
        .returns_leadership_ok(named_leadership("late"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(stuck)
        .provider_timeout(std::time::Duration::from_millis(20))
        .build()
        .unwrap();

    let err = quorum
        .leadership(&ticker("MSFT", Market::UsSec))
        .await
        .unwrap_err();
    assert!(
        matches!(err, QuorumError::AllProvidersTimedOut { .. }),
        "got {err:?}"
    );
}
