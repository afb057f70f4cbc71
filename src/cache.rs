//! Cache gate for raw fetched artifacts
//!
//! A raw artifact is written once per target and never refreshed: the
//! gate is a pure existence check with no TTL and no content
//! validation. Reruns therefore skip the network entirely, which is
//! what makes the fail-the-whole-run error policy cheap to live with.

use crate::Result;
use std::future::Future;
use std::path::Path;

/// Returns the raw artifact at `path`, fetching it only if absent
///
/// If the file exists it is read back untouched and `fetch` is never
/// invoked. Otherwise `fetch` runs exactly once and its body is
/// persisted to `path` before this returns, so the extractor always
/// reads from disk-backed content.
///
/// # Arguments
///
/// * `path` - Deterministic cache location for this target
/// * `source` - Human-readable description of where the fetch goes
/// * `fetch` - The fetch operation to run on a cache miss
pub async fn ensure_cached<F, Fut>(path: &Path, source: &str, fetch: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String>>,
{
    if tokio::fs::try_exists(path).await? {
        tracing::info!(
            "Skipping download for {} since {} already exists",
            source,
            path.display()
        );
        return Ok(tokio::fs::read_to_string(path).await?);
    }

    let body = fetch().await?;
    tokio::fs::write(path, &body).await?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_miss_fetches_once_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");
        let calls = AtomicUsize::new(0);

        let body = ensure_cached(&path, "https://example.com", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("<html>fresh</html>".to_string())
        })
        .await
        .unwrap();

        assert_eq!(body, "<html>fresh</html>");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html>fresh</html>");
    }

    #[tokio::test]
    async fn test_hit_never_invokes_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");
        std::fs::write(&path, "<html>cached</html>").unwrap();
        let calls = AtomicUsize::new(0);

        let body = ensure_cached(&path, "https://example.com", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("<html>fresh</html>".to_string())
        })
        .await
        .unwrap();

        assert_eq!(body, "<html>cached</html>");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_error_leaves_no_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.html");

        let result = ensure_cached(&path, "https://example.com", || async {
            Err(crate::ScrapeError::Extract("boom".to_string()))
        })
        .await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
