//! Interactive terminal dashboard: pick a market, enter a ticker, fetch a
//! governance scorecard, render it. Repeats until the user quits.

mod input;
mod render;

use std::sync::Arc;

use quorum::{Quorum, QuorumError, Ticker};
use quorum_disclosures::DisclosureConnector;
use quorum_finnhub::{FinnhubConfig, FinnhubConnector};
use quorum_gtranslate::GoogleTranslateConnector;
use quorum_yahoo::YahooConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly tracing with env-based filtering.
    // Suggested: RUST_LOG=info,quorum=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let quorum = build_orchestrator()?;

    println!("Corporate Governance Scorecard Dashboard");
    loop {
        // Idle until the user triggers a fetch.
        let Some(action) = input::prompt_fetch()? else {
            break;
        };

        let ticker = match Ticker::new(action.symbol, action.market) {
            Ok(t) => t,
            Err(e) => {
                println!("Invalid ticker: {e}");
                continue;
            }
        };

        println!("Fetching governance data for {ticker}...");
        match quorum.scorecard(&ticker).await {
            Ok(report) => render::render_report(&report),
            // Only an overall deadline produces an error; source failures
            // degrade inside the report.
            Err(e) => println!("Fetch failed: {e}"),
        }
    }

    Ok(())
}

/// Wire up the production connectors, falling back to the fixture connector
/// when `QUORUM_DASHBOARD_USE_MOCK` is set (CI and offline demos).
fn build_orchestrator() -> Result<Quorum, QuorumError> {
    if std::env::var("QUORUM_DASHBOARD_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector) ---");
        return Quorum::builder()
            .with_connector(Arc::new(quorum_mock::MockConnector::new()))
            .build();
    }

    let mut builder = Quorum::builder()
        .with_connector(Arc::new(YahooConnector::new_default()))
        .with_connector(Arc::new(DisclosureConnector::new_default()))
        .with_connector(Arc::new(GoogleTranslateConnector::new_default()));

    // The ESG credential is injected from the environment at startup; without
    // it the dashboard still runs, minus the breakdown.
    match FinnhubConfig::from_env() {
        Ok(cfg) => {
            builder = builder.with_connector(Arc::new(FinnhubConnector::new(cfg)));
        }
        Err(e) => {
            tracing::warn!("{e}; the ESG breakdown will be unavailable");
        }
    }

    builder.build()
}
