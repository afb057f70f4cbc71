//! Plain HTTP fetcher for server-rendered pages

use crate::{Result, ScrapeError};
use reqwest::Client;

/// Fetches a URL and returns the raw HTML body as text
///
/// No special headers beyond reqwest defaults. A non-2xx status or a
/// transport failure is a fetch error; there is no retry.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::info!("Downloading HTML from {}", url);

    let response = client
        .get(url)
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

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(body)
}
