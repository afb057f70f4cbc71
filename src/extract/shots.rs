//! Shot-chart marker extractor
//!
//! The rendered shooting page places one absolutely-positioned div per
//! shot attempt. Position comes from the inline style, make/miss from a
//! class modifier, and the point value from the tooltip text. Markers
//! are returned in document order, which is not chronological order —
//! callers must not read a timeline into the sequence.

use crate::config::ShotsConfig;
use crate::extract::value::style_px;
use crate::{Result, ScrapeError};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// One shot attempt pulled off the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// Horizontal chart position in pixels
    pub x: f64,

    /// Vertical chart position in pixels
    pub y: f64,

    /// Whether the attempt went in
    pub made_shot: bool,

    /// 3 for a three-point attempt, 2 otherwise
    pub shot_pts: u8,
}

/// Parses the rendered shot-chart HTML into one record per marker
pub fn parse_shots(html: &str, config: &ShotsConfig) -> Result<Vec<Shot>> {
    let document = Html::parse_document(html);

    let markers = Selector::parse(&config.marker_selector)
        .map_err(|e| ScrapeError::Selector(e.to_string()))?;

    let mut shots = Vec::new();
    for marker in document.select(&markers) {
        let style = marker.value().attr("style").unwrap_or("");

        let x = style_px(style, "left").ok_or_else(|| {
            ScrapeError::Extract(format!("shot marker without a left offset: {:?}", style))
        })?;
        let y = style_px(style, "top").ok_or_else(|| {
            ScrapeError::Extract(format!("shot marker without a top offset: {:?}", style))
        })?;

        let made_shot = marker
            .value()
            .classes()
            .any(|c| c == config.make_class);

        let shot_pts = if marker
            .value()
            .attr(&config.tip_attr)
            .is_some_and(|tip| tip.contains(&config.three_pointer_marker))
        {
            3
        } else {
            2
        };

        shots.push(Shot {
            x,
            y,
            made_shot,
            shot_pts,
        });
    }

    Ok(shots)
}
