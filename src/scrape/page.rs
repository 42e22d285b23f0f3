use tracing::{debug, warn};

use super::accordion::{self, PanelState};
use super::driver::{Browse, DriverError, ElementHandle};
use super::wait::{poll_until, wait_for_matches};
use crate::config::{
    ACCORDION_CSS, CONTROL_TIMEOUT, MEAL_ITEM_CSS, MENU_PACKAGE_CSS, MENU_PRESENCE_TIMEOUT,
    POLL_INTERVAL, RENDER_BUDGET,
};

/// Drives one restaurant page to a stable, fully rendered state and
/// snapshots its markup.
///
/// `Ok(None)` means no menu package showed up within budget: the restaurant
/// serves nothing today and contributes no entry. Every accordion is
/// expanded first (the day panels render lazily), then the snapshot waits
/// until at least one meal item carries real rendered text, so the markup is
/// captured after the client-side framework has finished injecting content.
pub async fn synchronize<B: Browse>(browser: &B, url: &str) -> Result<Option<String>, DriverError> {
    browser.goto(url).await?;

    let stations = wait_for_matches(browser, MENU_PACKAGE_CSS, MENU_PRESENCE_TIMEOUT).await;
    if stations.is_empty() {
        debug!(%url, "no menu package, closed today");
        return Ok(None);
    }

    let controls = wait_for_matches(browser, ACCORDION_CSS, CONTROL_TIMEOUT).await;
    for control in &controls {
        if accordion::expand(control).await? == PanelState::Stuck {
            warn!(%url, "accordion never reported expanded, continuing");
        }
    }

    let rendered = poll_until(RENDER_BUDGET, POLL_INTERVAL, || async move {
        let Ok(items) = browser.query_all(MEAL_ITEM_CSS).await else {
            return false;
        };
        if items.is_empty() {
            return false;
        }
        for item in &items {
            if let Ok(text) = item.text().await {
                if !text.trim().is_empty() {
                    return true;
                }
            }
        }
        false
    })
    .await;
    if !rendered.satisfied() {
        return Err(DriverError::RenderTimeout(url.to_string()));
    }

    Ok(Some(browser.page_html().await?))
}
