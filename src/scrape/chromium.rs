use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::driver::{Browse, DriverError, ElementHandle};

impl From<CdpError> for DriverError {
    fn from(e: CdpError) -> Self {
        Self::Command(e.to_string())
    }
}

/// The production driver: one headless Chromium process with a single page,
/// reused sequentially across every restaurant URL.
pub struct ChromiumDriver {
    browser: Browser,
    page: Page,
    event_loop: JoinHandle<()>,
}

impl ChromiumDriver {
    /// Launches the browser and opens the page the whole run reuses. The
    /// binary defaults to whatever chromiumoxide discovers; `CHROMIUM_BIN`
    /// overrides it for deployments with a pinned build.
    pub async fn launch() -> Result<Self, DriverError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(1920, 1080)
            .args([
                "--disable-gpu",
                "--disable-dev-shm-usage",
                "--disable-extensions",
                "--disable-background-networking",
                "--disable-sync",
                "--disable-default-apps",
                "--disable-features=TranslateUI",
            ]);
        if let Ok(binary) = std::env::var("CHROMIUM_BIN") {
            builder = builder.chrome_executable(binary);
        }
        let config = builder.build().map_err(DriverError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| DriverError::Launch(e.to_string()))?;
        // the handler must be pumped for the whole session, or every CDP
        // command stalls
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "browser event loop error");
                }
            }
        });
        let page = browser.new_page("about:blank").await?;
        Ok(Self {
            browser,
            page,
            event_loop,
        })
    }

    /// Releases the browser process. Must run even when the scrape failed; a
    /// failure here is fatal to the run.
    pub async fn shutdown(mut self) -> Result<(), DriverError> {
        let closed = self.browser.close().await;
        let waited = self.browser.wait().await;
        self.event_loop.abort();
        closed.map_err(|e| DriverError::Shutdown(e.to_string()))?;
        waited.map_err(|e| DriverError::Shutdown(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Browse for ChromiumDriver {
    type Handle = ChromiumHandle;

    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        self.page.goto(url).await?;
        Ok(())
    }

    async fn query_all(&self, css: &str) -> Result<Vec<ChromiumHandle>, DriverError> {
        // querying while the page is mid-navigation or mid-render errors;
        // the wait sites treat that the same as "nothing matched yet"
        match self.page.find_elements(css).await {
            Ok(elements) => Ok(elements.into_iter().map(ChromiumHandle).collect()),
            Err(e) => {
                trace!(css, error = %e, "query settled as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn page_html(&self) -> Result<String, DriverError> {
        Ok(self.page.content().await?)
    }
}

pub struct ChromiumHandle(Element);

#[async_trait]
impl ElementHandle for ChromiumHandle {
    async fn click(&self) -> Result<(), DriverError> {
        self.0.click().await?;
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
        Ok(self.0.attribute(name).await?)
    }

    async fn text(&self) -> Result<String, DriverError> {
        Ok(self.0.inner_text().await?.unwrap_or_default())
    }

    async fn scroll_into_view(&self) -> Result<(), DriverError> {
        self.0.scroll_into_view().await?;
        Ok(())
    }

    async fn can_interact(&self) -> bool {
        // an element without a clickable point is hidden, detached or still
        // laying out
        self.0.clickable_point().await.is_ok()
    }
}
