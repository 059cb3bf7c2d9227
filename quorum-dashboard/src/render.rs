//! Stdout rendering for a scorecard report.

use quorum::{EsgBreakdown, ScorecardReport, gauge_value, or_sentinel};

const GAUGE_WIDTH: usize = 40;

pub fn render_report(report: &ScorecardReport) {
    println!("\n========================================");
    println!("Corporate Governance Scorecard: {}", report.ticker);
    println!("as of {}", report.as_of.format("%Y-%m-%d %H:%M UTC"));
    println!("========================================");
    println!("\nGovernance Score: {}/100", report.score);

    render_leadership(report);
    render_esg(report.esg.as_ref());
    render_independence(report);
    render_reports(report);
    render_warnings(report);
}

fn render_leadership(report: &ScorecardReport) {
    println!("\n## Leadership");
    let leadership = report.leadership.as_ref();
    println!(
        "CEO:      {}",
        or_sentinel(leadership.and_then(|l| l.ceo.as_deref()))
    );
    println!(
        "Chairman: {}",
        or_sentinel(leadership.and_then(|l| l.chairman.as_deref()))
    );
    let board = leadership.map(|l| l.board.as_slice()).unwrap_or_default();
    if board.is_empty() {
        println!("Board Members: {}", or_sentinel(None));
    } else {
        println!("Board Members: {}", board.join(", "));
    }
}

fn render_esg(esg: Option<&EsgBreakdown>) {
    println!("\n## ESG Breakdown");
    let breakdown = esg.cloned().unwrap_or_default();
    println!("Environment: {}", fmt_score(breakdown.environment));
    println!("Social:      {}", fmt_score(breakdown.social));
    println!("Governance:  {}", fmt_score(breakdown.governance));
    println!("{}", gauge_line(gauge_value(&breakdown), GAUGE_WIDTH));
}

fn render_independence(report: &ScorecardReport) {
    let board_len = report
        .leadership
        .as_ref()
        .map(|l| l.board.len())
        .unwrap_or_default();
    if board_len == 0 {
        return;
    }
    // Illustrative even split; no independence data is published upstream.
    let (independent, non_independent) = independence_split(board_len);
    println!("\n## Board Independence");
    println!("Independent:     {independent}");
    println!("Non-Independent: {non_independent}");
}

fn render_reports(report: &ScorecardReport) {
    println!("\n## Governance Reports");
    match report.disclosures.as_ref().filter(|b| !b.is_empty()) {
        Some(bundle) => {
            for entry in &bundle.reports {
                let marker = if entry.translated { " (translated)" } else { "" };
                println!("{}{}: {}", entry.source, marker, entry.text);
            }
        }
        None => println!("No governance reports available for the selected market."),
    }
}

fn render_warnings(report: &ScorecardReport) {
    if report.warnings.is_empty() {
        return;
    }
    println!("\n## Warnings");
    for warning in &report.warnings {
        println!("- {warning}");
    }
}

/// Render a `[0, 100]` value as a fixed-width bar gauge.
fn gauge_line(value: f64, width: usize) -> String {
    let clamped = value.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "Gauge: [{}{}] {clamped:.1}/100",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

/// Fixed even split of the board used by the independence chart.
fn independence_split(board_len: usize) -> (usize, usize) {
    (board_len / 2, board_len / 2)
}

fn fmt_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => or_sentinel(None).to_string(),
    }
}
