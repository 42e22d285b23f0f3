use tracing::debug;

use super::driver::{Browse, DriverError, ElementHandle};
use super::wait::{poll_until, wait_for_matches};
use crate::config::{BANNER_TIMEOUT, COOKIE_DECLINE_CSS, POLL_INTERVAL, ROOT_URL};

/// Establishes the browser session on the site root and declines the cookie
/// banner, so later pages render without the overlay. Runs once per run.
///
/// A banner that never shows up (already dismissed, or not served) is not an
/// error; the primer just moves on.
pub async fn prime<B: Browse>(browser: &B) -> Result<(), DriverError> {
    browser.goto(ROOT_URL).await?;

    let controls = wait_for_matches(browser, COOKIE_DECLINE_CSS, BANNER_TIMEOUT).await;
    let Some(decline) = controls.first() else {
        debug!("cookie banner not shown, continuing");
        return Ok(());
    };
    decline.click().await?;

    let gone = poll_until(BANNER_TIMEOUT, POLL_INTERVAL, || async move {
        matches!(browser.query_all(COOKIE_DECLINE_CSS).await, Ok(v) if v.is_empty())
    })
    .await;
    if !gone.satisfied() {
        debug!("cookie banner still present after decline, continuing");
    }
    Ok(())
}
