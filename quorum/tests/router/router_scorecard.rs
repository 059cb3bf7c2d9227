use quorum::Quorum;
use quorum_core::{EsgBreakdown, Market, QuorumError};

use crate::helpers::{MockConnector, full_leadership, raw_bundle, ticker};

fn full_connector() -> std::sync::Arc<MockConnector> {
    MockConnector::builder()
        .name("full")
        .returns_leadership_ok(full_leadership())
        .returns_esg_ok(EsgBreakdown {
            environment: Some(2.0),
            social: Some(4.0),
            governance: Some(61.0),
        })
        .returns_disclosures_ok(raw_bundle())
        .translate_fn(|req| Ok(format!("[en] {}", req.text)))
        .build()
}

#[tokio::test]
async fn composes_all_sources_and_translates_for_regional_markets() {
    let quorum = Quorum::builder()
        .with_connector(full_connector())
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("600519", Market::ChinaAShares))
        .await
        .unwrap();

    assert_eq!(report.score, 100);
    assert!(report.warnings.is_empty());
    assert_eq!(
        report.leadership.as_ref().and_then(|l| l.ceo.as_deref()),
        Some("Avery Chief")
    );
    assert_eq!(
        report.esg.as_ref().and_then(|e| e.governance),
        Some(61.0)
    );

    let bundle = report.disclosures.expect("regional market carries reports");
    assert_eq!(bundle.reports.len(), 2);
    assert!(bundle.reports.iter().all(|r| r.translated));
    assert!(bundle.reports[0].text.starts_with("[en] "));
}

#[tokio::test]
async fn us_market_skips_translation_and_reports_nothing_missing() {
    let quorum = Quorum::builder()
        .with_connector(full_connector())
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("MSFT", Market::UsSec))
        .await
        .unwrap();

    // The mock serves disclosures for every market; without a translation
    // pair they must come back untouched.
    let bundle = report.disclosures.expect("bundle present");
    assert!(bundle.reports.iter().all(|r| !r.translated));
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn absent_disclosure_coverage_yields_no_bundle_and_no_warning() {
    let no_disclosures = MockConnector::builder()
        .name("no_disclosures")
        .returns_leadership_ok(full_leadership())
        .returns_esg_ok(EsgBreakdown::default())
        .build();

    let quorum = Quorum::builder()
        .with_connector(no_disclosures)
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("MSFT", Market::UsSec))
        .await
        .unwrap();

    assert!(report.disclosures.is_none());
    assert!(
        report.warnings.is_empty(),
        "capability absence is not a warning: {:?}",
        report.warnings
    );
}

#[tokio::test]
async fn failed_leadership_degrades_to_the_default_record_score() {
    let broken_leadership = MockConnector::builder()
        .name("broken_leadership")
        .returns_leadership_err(QuorumError::connector("broken_leadership", "boom"))
        .returns_esg_ok(EsgBreakdown::default())
        .build();

    let quorum = Quorum::builder()
        .with_connector(broken_leadership)
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("MSFT", Market::UsSec))
        .await
        .unwrap();

    assert!(report.leadership.is_none());
    // The all-missing record still earns the role-separation bonus.
    assert_eq!(report.score, 50);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].is_actionable());
}

#[tokio::test]
async fn translation_failures_annotate_the_affected_slots() {
    let flaky_translator = MockConnector::builder()
        .name("flaky_translator")
        .returns_leadership_ok(full_leadership())
        .returns_disclosures_ok(raw_bundle())
        .returns_translation_err(QuorumError::Translation("quota exhausted".to_string()))
        .build();

    let quorum = Quorum::builder()
        .with_connector(flaky_translator)
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("600519", Market::ChinaAShares))
        .await
        .unwrap();

    let bundle = report.disclosures.expect("bundle present");
    for entry in &bundle.reports {
        assert!(
            entry.text.starts_with("Translation error:"),
            "got {:?}",
            entry.text
        );
        assert!(!entry.translated);
    }
}

#[tokio::test]
async fn every_source_failing_still_produces_a_report() {
    let all_broken = MockConnector::builder()
        .name("all_broken")
        .returns_leadership_err(QuorumError::connector("all_broken", "no leadership"))
        .returns_esg_err(QuorumError::connector("all_broken", "no esg"))
        .returns_disclosures_err(QuorumError::connector("all_broken", "no reports"))
        .build();

    let quorum = Quorum::builder()
        .with_connector(all_broken)
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("600519", Market::ChinaAShares))
        .await
        .unwrap();

    assert!(report.leadership.is_none());
    assert!(report.esg.is_none());
    assert!(report.disclosures.is_none());
    assert_eq!(report.score, 50);
    assert_eq!(report.warnings.len(), 3);
}

#[tokio::test]
async fn not_found_sources_are_filtered_from_warnings() {
    let sparse = MockConnector::builder()
        .name("sparse")
        .returns_leadership_err(QuorumError::not_found("leadership for OBSCURE"))
        .returns_esg_err(QuorumError::not_found("esg for OBSCURE"))
        .build();

    let quorum = Quorum::builder().with_connector(sparse).build().unwrap();

    let report = quorum
        .scorecard(&ticker("OBSCURE", Market::UsSec))
        .await
        .unwrap();

    assert!(report.leadership.is_none());
    assert!(report.esg.is_none());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn fixture_connector_round_trip() {
    let quorum = Quorum::builder()
        .with_connector(std::sync::Arc::new(quorum_mock::MockConnector::new()))
        .build()
        .unwrap();

    let report = quorum
        .scorecard(&ticker("MSFT", Market::ChinaAShares))
        .await
        .unwrap();

    assert_eq!(report.score, 100);
    let bundle = report.disclosures.expect("fixture bundle present");
    assert!(bundle.reports.iter().all(|r| r.translated));
    assert!(bundle.reports[0].text.starts_with("[zh-CN->en] "));
}
