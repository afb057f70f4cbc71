//! Hoopsnap: small basketball-stats scraping pipelines
//!
//! This crate implements three independent fetch → cache → extract →
//! persist pipelines over three source types: a JSON stats API,
//! server-rendered box-score HTML, and a JavaScript-rendered shot chart
//! page that needs a headless browser to materialize.

pub mod cache;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod pipeline;

use thiserror::Error;

/// Main error type for hoopsnap operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Timed out after {seconds}s while loading {url}")]
    Timeout { url: String, seconds: u64 },

    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Browser launch error: {0}")]
    BrowserLaunch(String),

    #[error("Browser page closed before {url} finished loading")]
    PageClosed { url: String },

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Unexpected document shape: {0}")]
    Extract(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hoopsnap operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::{ApiConfig, BoxScoreConfig, Config, ShotsConfig};
pub use extract::{parse_box_score, parse_shots, Shot};
