//! Live-page side of the pipeline: one browser session, reused sequentially
//! across every configured restaurant URL. A single URL failing is logged
//! and skipped; the run carries on.

pub mod accordion;
pub mod chromium;
pub mod driver;
pub mod page;
pub mod session;
#[cfg(test)]
pub mod testing;
pub mod wait;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::config::RESTAURANT_URLS;
use crate::error::Result;
use crate::menu::{Restaurant, Restaurants};
use crate::parse::menu_page::{restaurant_from_document, restaurant_title};
use self::driver::Browse;

/// A full scrape run: prime the session once, then visit every configured
/// restaurant.
pub async fn run<B: Browse>(browser: &B) -> Result<Restaurants> {
    session::prime(browser).await?;
    Ok(scrape_all(browser, &RESTAURANT_URLS).await)
}

/// Visits each URL in order and accumulates every successfully extracted
/// restaurant, deduplicated by name in insertion order.
pub async fn scrape_all<B: Browse>(browser: &B, urls: &[&str]) -> Restaurants {
    let mut restaurants = Restaurants::new();
    for url in urls {
        info!(%url, "scraping restaurant page");
        match scrape_one(browser, url).await {
            Ok(Some(restaurant)) => {
                restaurants.push(restaurant);
            }
            Ok(None) => debug!(%url, "page contributed no restaurant"),
            // per-URL failure boundary: log and move on to the next page
            Err(e) => warn!(%url, error = %e, "failed to scrape restaurant"),
        }
    }
    restaurants
}

async fn scrape_one<B: Browse>(browser: &B, url: &str) -> Result<Option<Restaurant>> {
    let Some(snapshot) = page::synchronize(browser, url).await? else {
        return Ok(None);
    };
    let document = Html::parse_document(&snapshot);
    let Some(name) = restaurant_title(&document) else {
        debug!(%url, "no title element, discarding page");
        return Ok(None);
    };
    Ok(Some(restaurant_from_document(&name, &document)?))
}
