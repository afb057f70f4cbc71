//! Extractors turning cached HTML into flat records
//!
//! - `value` — text-to-tagged-value coercion and inline-style parsing
//! - `boxscore` — per-player rows from the box-score table
//! - `shots` — positional shot markers from the rendered shot chart
//!
//! Extraction is a pure function of the raw artifact: it runs on every
//! invocation and never touches the network.

mod boxscore;
mod shots;
mod value;

pub use boxscore::{parse_box_score, Record};
pub use shots::{parse_shots, Shot};
pub use value::{coerce, style_px};
