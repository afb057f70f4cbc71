//! Configuration types for the three scraping pipelines
//!
//! Every constant tied to an external site lives here: endpoint URLs,
//! fixed query parameters, spoofed headers, file names, and — most
//! importantly — the CSS selectors, class names, and tooltip substrings
//! the extractors match against. Those are contracts with third-party
//! markup we do not control; when a site changes, the fix should be a
//! one-field edit in this module, not a hunt through the extractors.
//!
//! There is no config file. Targets are fixed, so defaults carry the
//! whole configuration and tests override individual fields.

use std::path::PathBuf;

/// Top-level configuration: one section per pipeline
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub box_score: BoxScoreConfig,
    pub shots: ShotsConfig,
}

/// Player-dashboard API pipeline configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base endpoint for the year-over-year player dashboard
    pub endpoint: String,

    /// Player ids to fetch, in order
    pub player_ids: Vec<u64>,

    /// Spoofed browser user agent sent with every API request
    pub user_agent: String,

    /// Referer prefix; the player id and a trailing slash are appended
    pub referer_base: String,

    /// Directory the per-player output files are written into
    pub output_dir: PathBuf,

    /// Lower bound of the inter-request pacing delay (milliseconds)
    pub pacing_min_ms: u64,

    /// Upper bound (exclusive) of the pacing delay (milliseconds)
    pub pacing_max_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://stats.nba.com/stats/playerdashboardbyyearoveryear".to_string(),
            player_ids: vec![2544, 201935, 202695, 1629029],
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/78.0.3904.108 Safari/537.36"
                .to_string(),
            referer_base: "https://stats.nba.com/player/".to_string(),
            output_dir: PathBuf::from("."),
            pacing_min_ms: 300,
            pacing_max_ms: 1100,
        }
    }
}

impl ApiConfig {
    /// The fixed query parameters the dashboard endpoint requires.
    ///
    /// `PlayerID` is not in this list; the fetcher appends it exactly
    /// once per request. The rest are constants the endpoint rejects
    /// requests without, even when empty.
    pub fn fixed_query(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("DateFrom", ""),
            ("DateTo", ""),
            ("GameSegment", ""),
            ("LastNGames", "0"),
            ("LeagueID", "00"),
            ("Location", ""),
            ("MeasureType", "Base"),
            ("Month", "0"),
            ("OpponentTeamID", "0"),
            ("Outcome", ""),
            ("PORound", "0"),
            ("PaceAdjust", "N"),
            ("PerMode", "PerGame"),
            ("Period", "0"),
            ("PlusMinus", "N"),
            ("Rank", "N"),
            ("Season", "2019-20"),
            ("SeasonSegment", ""),
            ("SeasonType", "Regular Season"),
            ("ShotClockRange", ""),
            ("Split", "yoy"),
            ("VsConference", ""),
            ("VsDivision", ""),
        ]
    }

    /// Referer header value for a given player id
    pub fn referer_for(&self, player_id: u64) -> String {
        format!("{}{}/", self.referer_base, player_id)
    }

    /// Output path for a given player id
    pub fn output_path(&self, player_id: u64) -> PathBuf {
        self.output_dir.join(format!("{}.json", player_id))
    }
}

/// Box-score pipeline configuration (server-rendered HTML)
#[derive(Debug, Clone)]
pub struct BoxScoreConfig {
    /// Page to download
    pub url: String,

    /// Where the raw HTML is cached
    pub cache_file: String,

    /// Where the extracted rows are written
    pub output_file: String,

    /// Selector for the rows of the away-team stats table
    pub row_selector: String,

    /// Class marking summary/total rows, which are skipped
    pub highlight_class: String,

    /// Class of the cell holding the player name
    pub name_class: String,

    /// Selector, relative to a name cell, for the player-name label
    pub name_label_selector: String,
}

impl Default for BoxScoreConfig {
    fn default() -> Self {
        Self {
            url: "https://www.espn.com/nba/boxscore?gameId=401160888".to_string(),
            cache_file: "boxscore.html".to_string(),
            output_file: "boxscore.json".to_string(),
            row_selector: ".gamepackage-away-wrap tbody tr".to_string(),
            highlight_class: "highlight".to_string(),
            name_class: "name".to_string(),
            name_label_selector: "a span".to_string(),
        }
    }
}

/// Shot-chart pipeline configuration (JavaScript-rendered HTML)
#[derive(Debug, Clone)]
pub struct ShotsConfig {
    /// Page to render and download
    pub url: String,

    /// Where the rendered HTML is cached
    pub cache_file: String,

    /// Where the extracted shots are written
    pub output_file: String,

    /// Selector for the shot markers inside the chart container
    pub marker_selector: String,

    /// Class modifier present on made shots
    pub make_class: String,

    /// Attribute holding the marker's tooltip text
    pub tip_attr: String,

    /// Substring of the tooltip text that marks a three-point attempt
    pub three_pointer_marker: String,

    /// Spoofed user agent for the browser page
    pub user_agent: String,

    /// Browser viewport, pretending to be a desktop window
    pub viewport: (u32, u32),

    /// Bound on every browser operation (seconds)
    pub timeout_secs: u64,
}

impl Default for ShotsConfig {
    fn default() -> Self {
        Self {
            url: "https://www.basketball-reference.com/players/c/curryst01/shooting/2020"
                .to_string(),
            cache_file: "shots.html".to_string(),
            output_file: "shots.json".to_string(),
            marker_selector: ".shot-area > div".to_string(),
            make_class: "make".to_string(),
            tip_attr: "tip".to_string(),
            three_pointer_marker: "3-pointer".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/47.0.2526.111 Safari/537.36"
                .to_string(),
            viewport: (1980, 1080),
            timeout_secs: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_query_excludes_player_id() {
        let config = ApiConfig::default();
        assert!(config.fixed_query().iter().all(|(k, _)| *k != "PlayerID"));
    }

    #[test]
    fn test_referer_embeds_player_id() {
        let config = ApiConfig::default();
        assert_eq!(config.referer_for(2544), "https://stats.nba.com/player/2544/");
    }

    #[test]
    fn test_output_path_named_by_id() {
        let config = ApiConfig::default();
        assert_eq!(config.output_path(201935), PathBuf::from("./201935.json"));
    }

    #[test]
    fn test_default_pacing_window() {
        let config = ApiConfig::default();
        assert!(config.pacing_min_ms < config.pacing_max_ms);
        assert_eq!(config.pacing_min_ms, 300);
        assert_eq!(config.pacing_max_ms, 1100);
    }
}
