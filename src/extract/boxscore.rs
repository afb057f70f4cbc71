//! Box-score table extractor
//!
//! Pulls one record per player row out of the away-team stats table.
//! The field set is not ours to define: each cell's class attribute
//! names the field, so the record shape is whatever the document says
//! it is. Summary rows (carrying the highlight class) are skipped to
//! keep only per-player data.

use crate::config::BoxScoreConfig;
use crate::extract::value::coerce;
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

/// One extracted table row: field name → scalar value, in cell order
pub type Record = serde_json::Map<String, Value>;

/// Parses the box-score HTML into per-player records
///
/// Row order follows the document. Cells without a class attribute
/// carry no field name and are skipped.
pub fn parse_box_score(html: &str, config: &BoxScoreConfig) -> Result<Vec<Record>> {
    let document = Html::parse_document(html);

    let rows = parse_selector(&config.row_selector)?;
    let cells = parse_selector("td")?;
    let name_label = parse_selector(&config.name_label_selector)?;

    let mut records = Vec::new();
    for row in document.select(&rows) {
        if has_class(&row, &config.highlight_class) {
            continue;
        }

        let mut record = Record::new();
        for cell in row.select(&cells) {
            let Some(key) = cell.value().attr("class") else {
                continue;
            };

            let text = if key == config.name_class {
                // The name cell nests team/position noise after the
                // label; only the first label span is the name.
                cell.select(&name_label)
                    .next()
                    .map(|label| label.text().collect::<String>())
                    .unwrap_or_default()
            } else {
                cell.text().collect::<String>()
            };

            record.insert(key.to_string(), coerce(text.trim()));
        }

        records.push(record);
    }

    Ok(records)
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(e.to_string()))
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIXTURE: &str = r#"
        <html><body>
        <div class="gamepackage-away-wrap">
          <table>
            <tbody>
              <tr>
                <td class="name"><a href="/p/1"><span>L. James</span><span class="pos">SF</span></a></td>
                <td class="min">36</td>
                <td class="pts">24</td>
              </tr>
              <tr>
                <td class="name"><a href="/p/2"><span>A. Davis</span><span class="pos">PF</span></a></td>
                <td class="min">34</td>
                <td class="pts">27</td>
              </tr>
              <tr>
                <td class="name"><a href="/p/3"><span>D. Green</span><span class="pos">SG</span></a></td>
                <td class="min">28</td>
                <td class="pts">11</td>
              </tr>
              <tr class="highlight">
                <td class="name">TEAM</td>
                <td class="min">240</td>
                <td class="pts">112</td>
              </tr>
            </tbody>
          </table>
        </div>
        </body></html>"#;

    #[test]
    fn test_excludes_highlight_row() {
        let records = parse_box_score(FIXTURE, &BoxScoreConfig::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r["name"] != json!("TEAM")));
    }

    #[test]
    fn test_numeric_cells_become_numbers() {
        let records = parse_box_score(FIXTURE, &BoxScoreConfig::default()).unwrap();
        assert_eq!(records[0]["pts"], json!(24));
        assert_eq!(records[0]["min"], json!(36));
    }

    #[test]
    fn test_name_cell_takes_first_label_span() {
        let records = parse_box_score(FIXTURE, &BoxScoreConfig::default()).unwrap();
        assert_eq!(records[0]["name"], json!("L. James"));
        assert_eq!(records[1]["name"], json!("A. Davis"));
    }

    #[test]
    fn test_row_order_preserved() {
        let records = parse_box_score(FIXTURE, &BoxScoreConfig::default()).unwrap();
        let names: Vec<&Value> = records.iter().map(|r| &r["name"]).collect();
        assert_eq!(
            names,
            vec![&json!("L. James"), &json!("A. Davis"), &json!("D. Green")]
        );
    }

    #[test]
    fn test_field_order_follows_cell_order() {
        let records = parse_box_score(FIXTURE, &BoxScoreConfig::default()).unwrap();
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["name", "min", "pts"]);
    }

    #[test]
    fn test_empty_document_yields_no_records() {
        let records =
            parse_box_score("<html><body></body></html>", &BoxScoreConfig::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_row_selector_is_an_error() {
        let config = BoxScoreConfig {
            row_selector: ":::".to_string(),
            ..BoxScoreConfig::default()
        };
        assert!(matches!(
            parse_box_score(FIXTURE, &config),
            Err(ScrapeError::Selector(_))
        ));
    }
}
