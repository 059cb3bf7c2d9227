use quorum::Quorum;
use quorum_core::{QuorumError, TranslationRequest, ZH_CN_TO_EN};

use crate::helpers::MockConnector;

#[tokio::test]
async fn translation_uses_the_first_working_provider() {
    let broken = MockConnector::builder()
        .name("broken")
        .returns_translation_err(QuorumError::Translation("quota exhausted".to_string()))
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .translate_fn(|req| Ok(format!("[en] {}", req.text)))
        .build();

    let quorum = Quorum::builder()
        .with_connector(broken)
        .with_connector(ok)
        .build()
        .unwrap();

    let req = TranslationRequest::new("治理", ZH_CN_TO_EN);
    assert_eq!(quorum.translate(&req).await.unwrap(), "[en] 治理");
}

#[tokio::test]
async fn all_translation_failures_aggregate() {
    let a = MockConnector::builder()
        .name("a")
        .returns_translation_err(QuorumError::Translation("bad payload".to_string()))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_translation_err(QuorumError::Translation("timeout".to_string()))
        .build();

    let quorum = Quorum::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let req = TranslationRequest::new("治理", ZH_CN_TO_EN);
    let err = quorum.translate(&req).await.unwrap_err();
    match err {
        QuorumError::AllProvidersFailed(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(
                errors
                    .iter()
                    .all(|e| matches!(e, QuorumError::Translation(_)))
            );
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn no_translator_registered_is_unsupported() {
    let esg_only = MockConnector::builder()
        .name("esg_only")
        .returns_esg_ok(quorum_core::EsgBreakdown::default())
        .build();
    let quorum = Quorum::builder().with_connector(esg_only).build().unwrap();

    let req = TranslationRequest::new("治理", ZH_CN_TO_EN);
    let err = quorum.translate(&req).await.unwrap_err();
    assert!(matches!(err, QuorumError::Unsupported { .. }), "got {err:?}");
}
