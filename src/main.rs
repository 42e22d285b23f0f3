#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod menu;
mod parse;
mod scrape;
#[cfg(test)]
mod testing_fixtures;

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;

use crate::menu::Restaurants;
use crate::scrape::chromium::ChromiumDriver;

pub use error::Result;

/// What the run hands downstream: every scraped restaurant plus the moment
/// the data was generated.
#[derive(Debug, serde::Serialize)]
struct MenuReport {
    generated_at: DateTime<Utc>,
    restaurants: Restaurants,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let driver = ChromiumDriver::launch().await?;
    let outcome = scrape::run(&driver).await;
    // the browser process is released no matter how the run went
    driver.shutdown().await?;
    let restaurants = outcome?;

    let report = MenuReport {
        generated_at: Utc::now(),
        restaurants,
    };
    serde_json::to_writer_pretty(std::io::stdout().lock(), &report)?;
    println!();
    Ok(())
}
