use quorum::Quorum;
use quorum_core::{Market, QuorumError};

use crate::helpers::{MockConnector, full_leadership, ticker};

#[tokio::test]
async fn leadership_succeeds() {
    let ok = MockConnector::builder()
        .name("ok_leadership")
        .returns_leadership_ok(full_leadership())
        .build();
    let quorum = Quorum::builder().with_connector(ok).build().unwrap();

    let t = ticker("MSFT", Market::UsSec);
    let lead = quorum.leadership(&t).await.unwrap();
    assert_eq!(lead.ceo.as_deref(), Some("Avery Chief"));
    assert_eq!(lead.board.len(), 5);
}

#[tokio::test]
async fn falls_back_to_the_next_provider_on_failure() {
    let broken = MockConnector::builder()
        .name("broken")
        .returns_leadership_err(QuorumError::connector("broken", "boom"))
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_leadership_ok(full_leadership())
        .build();

    let quorum = Quorum::builder()
        .with_connector(broken)
        .with_connector(ok)
        .build()
        .unwrap();

    let t = ticker("MSFT", Market::UsSec);
    let lead = quorum.leadership(&t).await.unwrap();
    assert_eq!(lead.chairman.as_deref(), Some("Blair Chair"));
}

#[tokio::test]
async fn unsupported_when_no_provider_advertises_the_capability() {
    // ESG-only connector; leadership is never advertised.
    let esg_only = MockConnector::builder()
        .name("esg_only")
        .returns_esg_ok(quorum_core::EsgBreakdown::default())
        .build();
    let quorum = Quorum::builder().with_connector(esg_only).build().unwrap();

    let t = ticker("MSFT", Market::UsSec);
    let err = quorum.leadership(&t).await.unwrap_err();
    assert!(matches!(err, QuorumError::Unsupported { .. }), "got {err:?}");
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = MockConnector::builder()
        .name("a")
        .returns_leadership_err(QuorumError::not_found("leadership for MSFT"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_leadership_err(QuorumError::not_found("leadership for MSFT"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let t = ticker("MSFT", Market::UsSec);
    let err = quorum.leadership(&t).await.unwrap_err();
    match err {
        QuorumError::NotFound { what } => assert_eq!(what, "leadership for MSFT"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn mixed_failures_aggregate() {
    let a = MockConnector::builder()
        .name("a")
        .returns_leadership_err(QuorumError::not_found("leadership for MSFT"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_leadership_err(QuorumError::connector("b", "boom"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let t = ticker("MSFT", Market::UsSec);
    let err = quorum.leadership(&t).await.unwrap_err();
    match err {
        QuorumError::AllProvidersFailed(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected: {other:?}"),
    }
}
