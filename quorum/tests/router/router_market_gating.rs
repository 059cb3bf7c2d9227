use quorum::Quorum;
use quorum_core::{Market, QuorumError};

use crate::helpers::{MockConnector, raw_bundle, ticker};

fn regional_disclosures() -> std::sync::Arc<MockConnector> {
    MockConnector::builder()
        .name("regional")
        .markets(&[Market::ChinaAShares, Market::TaiwanTsec])
        .returns_disclosures_ok(raw_bundle())
        .build()
}

#[tokio::test]
async fn disclosures_route_for_covered_markets() {
    let quorum = Quorum::builder()
        .with_connector(regional_disclosures())
        .build()
        .unwrap();

    for market in [Market::ChinaAShares, Market::TaiwanTsec] {
        let bundle = quorum.disclosures(&ticker("600519", market)).await.unwrap();
        assert_eq!(bundle.reports.len(), 2);
    }
}

#[tokio::test]
async fn uncovered_market_is_unsupported() {
    let quorum = Quorum::builder()
        .with_connector(regional_disclosures())
        .build()
        .unwrap();

    let err = quorum
        .disclosures(&ticker("MSFT", Market::UsSec))
        .await
        .unwrap_err();
    assert!(matches!(err, QuorumError::Unsupported { .. }), "got {err:?}");
}
