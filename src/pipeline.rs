//! Pipeline orchestrators
//!
//! One entry function per pipeline. Each is a strictly sequential
//! fetch → cache → extract → persist pass; no fetches run in parallel
//! anywhere. The API pipeline additionally sleeps a randomized interval
//! between players so the request stream never looks bursty to the
//! upstream service.

use crate::cache::ensure_cached;
use crate::config::{ApiConfig, BoxScoreConfig, Config, ShotsConfig};
use crate::fetch::{build_api_client, fetch_page, fetch_player_dashboard, BrowserSession};
use crate::output::write_json;
use crate::{extract, Result};
use rand::Rng;
use std::path::Path;
use std::time::Duration;

/// Samples one pacing delay from the configured window
///
/// Uniform over `[pacing_min_ms, pacing_max_ms)`.
pub fn pacing_delay(config: &ApiConfig) -> Duration {
    let ms = rand::thread_rng().gen_range(config.pacing_min_ms..config.pacing_max_ms);
    Duration::from_millis(ms)
}

/// Runs the player-dashboard pipeline
///
/// Fetches the year-over-year dashboard for every configured player id
/// in order, writing `{id}.json` per player. There is no cache gate
/// here: dashboards are always refetched and their outputs always
/// overwritten. A pacing delay follows every fetch, the last one
/// included.
pub async fn run_players(config: &ApiConfig) -> Result<()> {
    tracing::info!("Starting dashboard fetch for players {:?}", config.player_ids);

    let client = build_api_client(config)?;

    for &player_id in &config.player_ids {
        let dashboard = fetch_player_dashboard(&client, config, player_id).await?;
        write_json(&config.output_path(player_id), &dashboard).await?;

        let delay = pacing_delay(config);
        tracing::debug!("Pacing for {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }

    tracing::info!("Done");
    Ok(())
}

/// Runs the box-score pipeline
///
/// Single target: download the page unless the raw HTML is already
/// cached, then extract the away-team player rows and write them out.
/// Extraction always reruns; only the download is gated.
pub async fn run_boxscore(config: &BoxScoreConfig) -> Result<()> {
    let client = reqwest::Client::new();

    let html = ensure_cached(Path::new(&config.cache_file), &config.url, || {
        fetch_page(&client, &config.url)
    })
    .await?;

    tracing::info!("Parsing box score HTML");
    let records = extract::parse_box_score(&html, config)?;

    write_json(Path::new(&config.output_file), &records).await?;
    tracing::info!("Wrote {} rows to {}", records.len(), config.output_file);

    Ok(())
}

/// Runs the shot-chart pipeline
///
/// The chart only exists after the page's JavaScript runs, so a cache
/// miss launches a headless browser for the fetch. The browser is torn
/// down before parsing begins, and is torn down on fetch failure too.
pub async fn run_shots(config: &ShotsConfig) -> Result<()> {
    let session = BrowserSession::launch(config).await?;

    let fetched = ensure_cached(Path::new(&config.cache_file), &config.url, || {
        session.fetch_rendered(&config.url)
    })
    .await;

    // Teardown happens whether or not the fetch succeeded.
    let closed = session.close().await;
    let html = fetched?;
    closed?;

    tracing::info!("Parsing shot chart HTML");
    let shots = extract::parse_shots(&html, config)?;

    write_json(Path::new(&config.output_file), &shots).await?;
    tracing::info!("Wrote {} shots to {}", shots.len(), config.output_file);

    Ok(())
}

/// Runs all three pipelines back to back
pub async fn run_all(config: &Config) -> Result<()> {
    run_players(&config.api).await?;
    run_boxscore(&config.box_score).await?;
    run_shots(&config.shots).await?;
    Ok(())
}
