use std::fmt::Display;

use async_trait::async_trait;

/// Failures on the live-driver side. `Launch` and `Shutdown` are fatal to
/// the whole run; the rest are isolated at the per-URL boundary.
#[derive(Debug)]
pub enum DriverError {
    Launch(String),
    Command(String),
    RenderTimeout(String),
    Shutdown(String),
}

impl Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Launch(msg) => write!(f, "Browser Launch Error: {msg}"),
            Self::Command(msg) => write!(f, "Browser Command Error: {msg}"),
            Self::RenderTimeout(url) => {
                write!(f, "Render Timeout: meal items never carried text on {url}")
            }
            Self::Shutdown(msg) => write!(f, "Browser Shutdown Error: {msg}"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Capability surface over a live, JavaScript-rendered page. Everything the
/// extraction pipeline needs from a browser fits in these two traits, so any
/// automation product (or a scripted fake in tests) can stand behind them.
#[async_trait]
pub trait Browse: Send + Sync {
    type Handle: ElementHandle;

    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// Every element currently matching the selector, in document order.
    /// Empty while the page is still settling.
    async fn query_all(&self, css: &str) -> Result<Vec<Self::Handle>, DriverError>;

    /// Snapshot of the fully rendered markup.
    async fn page_html(&self) -> Result<String, DriverError>;
}

/// A handle to one live element.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    async fn click(&self) -> Result<(), DriverError>;

    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError>;

    /// The element's rendered text.
    async fn text(&self) -> Result<String, DriverError>;

    /// Scrolls the element into the viewport, which also triggers lazy
    /// rendering of content gated on intersection observers.
    async fn scroll_into_view(&self) -> Result<(), DriverError>;

    /// Whether the element can currently receive a click.
    async fn can_interact(&self) -> bool;
}
