use chrono::Utc;
use tracing::debug;

use quorum_core::score::governance_score;
use quorum_core::{
    DisclosureReport, LanguagePair, Leadership, QuorumError, ReportBundle, ScorecardReport,
    Ticker, TranslationRequest,
};

use crate::Quorum;

fn append_actionable(errors: &mut Vec<QuorumError>, err: QuorumError) {
    match err {
        QuorumError::AllProvidersFailed(list) => {
            for inner in list {
                append_actionable(errors, inner);
            }
        }
        QuorumError::Unsupported { .. } | QuorumError::NotFound { .. } => {}
        other => errors.push(other),
    }
}

impl Quorum {
    /// Build a best-effort governance scorecard by composing all data sources.
    ///
    /// Behavior and trade-offs:
    /// - Executes `leadership`, `esg`, and `disclosures` concurrently, then
    ///   synthesizes a single report. Individual subcalls may fail without
    ///   failing the overall result; their payloads stay `None` and actionable
    ///   errors land in `warnings` (capability absence and not-found conditions
    ///   are filtered, so markets without disclosure sources warn about
    ///   nothing).
    /// - When the ticker's market carries a translation pair, each disclosure
    ///   entry is translated in place; a failed translation annotates the
    ///   affected slot rather than aborting.
    /// - The governance score is recomputed on every call from the leadership
    ///   record, falling back to the all-missing record when the provider
    ///   failed.
    ///
    /// # Errors
    /// Returns an error only when the configured overall request deadline is
    /// exceeded. Source failures never abort the report.
    pub async fn scorecard(&self, ticker: &Ticker) -> Result<ScorecardReport, QuorumError> {
        let joined = Self::with_request_deadline(self.cfg.request_timeout, async {
            tokio::join!(
                self.leadership(ticker),
                self.esg(ticker),
                self.disclosures(ticker)
            )
        })
        .await;
        let (leadership_res, esg_res, disclosures_res) = match joined {
            Ok(v) => v,
            Err(_) => return Err(QuorumError::request_timeout("scorecard")),
        };

        let mut warnings: Vec<QuorumError> = Vec::new();

        let leadership = match leadership_res {
            Ok(v) => Some(v),
            Err(e) => {
                append_actionable(&mut warnings, e);
                None
            }
        };
        let esg = match esg_res {
            Ok(v) => Some(v),
            Err(e) => {
                append_actionable(&mut warnings, e);
                None
            }
        };
        let disclosures = match disclosures_res {
            Ok(v) => Some(v),
            Err(e) => {
                append_actionable(&mut warnings, e);
                None
            }
        };

        let disclosures = match (ticker.market().translation(), disclosures) {
            (Some(pair), Some(bundle)) => Some(self.translate_bundle(bundle, pair).await),
            (_, bundle) => bundle,
        };

        let score = match &leadership {
            Some(record) => governance_score(record),
            None => governance_score(&Leadership::default()),
        };
        debug!(
            symbol = ticker.symbol(),
            score,
            warnings = warnings.len(),
            "scorecard assembled"
        );

        Ok(ScorecardReport {
            ticker: ticker.clone(),
            leadership,
            esg,
            disclosures,
            score,
            as_of: Utc::now(),
            warnings,
        })
    }

    /// Translate every entry of a bundle, annotating entries whose translation
    /// failed instead of dropping them.
    async fn translate_bundle(&self, bundle: ReportBundle, pair: LanguagePair) -> ReportBundle {
        let mut reports = Vec::with_capacity(bundle.reports.len());
        for report in bundle.reports {
            let req = TranslationRequest::new(report.text.clone(), pair);
            match self.translate(&req).await {
                Ok(text) => reports.push(DisclosureReport {
                    source: report.source,
                    text,
                    translated: true,
                }),
                Err(e) => reports.push(DisclosureReport {
                    text: format!("Translation error: {e}"),
                    ..report
                }),
            }
        }
        ReportBundle { reports }
    }
}
