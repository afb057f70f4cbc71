//! Persister for structured output files
//!
//! Everything written here is re-derivable from the cached raw
//! artifacts, so writes are plain overwrites with no atomic-rename
//! step. Output is pretty-printed JSON (2-space indentation) with a
//! trailing newline.

use crate::Result;
use serde::Serialize;
use std::path::Path;

/// Serializes `value` as indented JSON and writes it to `path`
///
/// Overwrites any existing file unconditionally.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    tokio::fs::write(path, body).await?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_writes_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&path, &json!({"pts": 24})).await.unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body, "{\n  \"pts\": 24\n}\n");
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale").unwrap();

        write_json(&path, &json!([1, 2])).await.unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.starts_with('['));
        assert!(!body.contains("stale"));
    }
}
