//! Fetchers for the three source types
//!
//! - `api` — JSON stats API requests with spoofed browser headers
//! - `page` — plain GET for server-rendered HTML
//! - `browser` — headless-Chrome fetch for JavaScript-rendered HTML

mod api;
mod browser;
mod page;

pub use api::{build_api_client, dashboard_url, fetch_player_dashboard};
pub use browser::BrowserSession;
pub use page::fetch_page;
