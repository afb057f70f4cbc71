//! Headless-Chrome fetcher for JavaScript-rendered pages
//!
//! The browser process is a run-wide resource: launched once, shared by
//! every rendered fetch in the run, and explicitly closed afterwards
//! whatever the fetch outcome. Each fetch gets a fresh page context —
//! reusing a page across fetches has been seen to hang on `content()`,
//! so a page lives exactly as long as one fetch.

use crate::config::ShotsConfig;
use crate::{Result, ScrapeError};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::EventDomContentEventFired;
use chromiumoxide::handler::viewport::Viewport;
use futures::{FutureExt, Stream, StreamExt};
use std::time::Duration;
use tokio::task::JoinHandle;

/// A running headless-Chrome instance plus its CDP event pump
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    user_agent: String,
    timeout: Duration,
}

impl BrowserSession {
    /// Launches a headless browser configured for rendered fetches
    ///
    /// The viewport is fixed at the configured desktop size so the page
    /// lays out like a real browser window would.
    pub async fn launch(config: &ShotsConfig) -> Result<Self> {
        let (width, height) = config.viewport;

        let browser_config = BrowserConfig::builder()
            .viewport(Viewport {
                width,
                height,
                ..Default::default()
            })
            .build()
            .map_err(ScrapeError::BrowserLaunch)?;

        tracing::debug!("Launching headless browser");
        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // Drain CDP events for the lifetime of the browser; dropping
        // them would stall every page operation.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Navigates to `url` in a fresh page and returns the rendered HTML
    ///
    /// Waits only for the DOMContentLoaded milestone, not for every
    /// subresource. The whole operation — page creation through
    /// serialization — is bounded by the configured timeout; hitting it
    /// is a fetch error and is not retried.
    pub async fn fetch_rendered(&self, url: &str) -> Result<String> {
        tracing::info!("Rendering {}", url);

        let seconds = self.timeout.as_secs();
        tokio::time::timeout(self.timeout, self.render_page(url))
            .await
            .map_err(|_| ScrapeError::Timeout {
                url: url.to_string(),
                seconds,
            })?
    }

    async fn render_page(&self, url: &str) -> Result<String> {
        let page = self.browser.new_page("about:blank").await?;
        page.set_user_agent(&self.user_agent).await?;

        // Subscribe before navigating so the DOM-ready event cannot
        // slip past between goto and the wait. The initial blank page
        // fires its own DOM-ready, so anything already queued is stale
        // and must not count for the real navigation.
        let mut dom_ready = page.event_listener::<EventDomContentEventFired>().await?;
        discard_queued(&mut dom_ready);
        page.goto(url).await?;
        await_dom_ready(&mut dom_ready, url).await?;

        let html = page.content().await?;
        page.close().await?;

        Ok(html)
    }

    /// Shuts the browser down and stops the event pump
    ///
    /// Must be called once all rendered fetches are done; the browser
    /// process outlives individual fetches by design.
    pub async fn close(mut self) -> Result<()> {
        tracing::debug!("Closing headless browser");
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}

/// Throws away events that are already sitting in the stream
fn discard_queued<S: Stream + Unpin>(events: &mut S) {
    while events.next().now_or_never().flatten().is_some() {}
}

/// Waits for the next DOM-ready event for `url`
///
/// A stream that ends instead of yielding means the page (or the CDP
/// connection behind it) went away mid-navigation; that is a fetch
/// error, not a ready signal.
async fn await_dom_ready<S: Stream + Unpin>(events: &mut S, url: &str) -> Result<()> {
    match events.next().await {
        Some(_) => Ok(()),
        None => Err(ScrapeError::PageClosed {
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_closed_stream_is_a_fetch_error() {
        let mut events = stream::empty::<()>();
        let err = await_dom_ready(&mut events, "https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::PageClosed { .. }));
    }

    #[tokio::test]
    async fn test_event_after_navigation_is_ready() {
        let mut events = stream::iter([()]);
        assert!(await_dom_ready(&mut events, "https://example.com")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_stale_event_from_blank_page_does_not_count() {
        // One event queued before navigation: discarding it must leave
        // nothing for the post-navigation wait to latch onto.
        let mut events = stream::iter([()]);
        discard_queued(&mut events);

        let err = await_dom_ready(&mut events, "https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::PageClosed { .. }));
    }
}
