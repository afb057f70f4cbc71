//! JSON stats API fetcher
//!
//! The stats endpoint refuses requests that do not look like a browser
//! session, so the client carries a spoofed Chrome user agent, a
//! keep-alive connection header, the `x-nba-stats-origin` marker, and a
//! per-player referer pointing back at the player page. Every request
//! asks for a JSON-typed response via the Accept header.

use crate::config::ApiConfig;
use crate::{Result, ScrapeError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, REFERER};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for all dashboard requests
///
/// # Arguments
///
/// * `config` - The API pipeline configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_api_client(config: &ApiConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));

    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Assembles the dashboard request URL for one player
///
/// The fixed query parameters come from the config; `PlayerID` is
/// appended here and appears exactly once.
pub fn dashboard_url(config: &ApiConfig, player_id: u64) -> Result<Url> {
    let mut url = Url::parse(&config.endpoint)?;

    {
        let mut query = url.query_pairs_mut();
        for (key, value) in config.fixed_query() {
            query.append_pair(key, value);
        }
        query.append_pair("PlayerID", &player_id.to_string());
    }

    Ok(url)
}

/// Fetches the year-over-year dashboard for one player
///
/// Issues a single GET; any non-2xx status or transport failure is a
/// fetch error. There is no retry — pacing between calls is the
/// caller's job.
///
/// # Arguments
///
/// * `client` - Client from [`build_api_client`]
/// * `config` - The API pipeline configuration
/// * `player_id` - Numeric player identifier
///
/// # Returns
///
/// The parsed JSON response body.
pub async fn fetch_player_dashboard(
    client: &Client,
    config: &ApiConfig,
    player_id: u64,
) -> Result<serde_json::Value> {
    let url = dashboard_url(config, player_id)?;
    tracing::info!("Making API request for player {}", player_id);

    let response = client
        .get(url.clone())
        .header(REFERER, config.referer_for(player_id))
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_api_client() {
        let config = ApiConfig::default();
        assert!(build_api_client(&config).is_ok());
    }

    #[test]
    fn test_player_id_appears_exactly_once() {
        let config = ApiConfig::default();
        let url = dashboard_url(&config, 2544).unwrap();

        let ids: Vec<String> = url
            .query_pairs()
            .filter(|(k, _)| k == "PlayerID")
            .map(|(_, v)| v.into_owned())
            .collect();

        assert_eq!(ids, vec!["2544".to_string()]);
    }

    #[test]
    fn test_fixed_parameters_present() {
        let config = ApiConfig::default();
        let url = dashboard_url(&config, 2544).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs.contains(&("Season".to_string(), "2019-20".to_string())));
        assert!(pairs.contains(&("SeasonType".to_string(), "Regular Season".to_string())));
        assert!(pairs.contains(&("Split".to_string(), "yoy".to_string())));
        assert!(pairs.contains(&("PerMode".to_string(), "PerGame".to_string())));
    }

    #[test]
    fn test_referer_matches_requested_player() {
        let config = ApiConfig::default();
        let referer = config.referer_for(1629029);
        assert!(referer.contains("1629029"));
        assert!(referer.ends_with('/'));
    }
}
