//! Turns one restaurant's snapshot markup into a [`Restaurant`]. The markup
//! is assumed structurally stable; a missing anchor inside a rendered page
//! is reported as an error instead of being skipped.

mod allergens;
mod day;
mod nutrition;
mod price_line;
mod station;

use scraper::Html;

pub use allergens::map_allergen_codes;
pub use price_line::parse_price_line;

use super::{collapsed_text, Error};
use crate::menu::Restaurant;
use crate::static_selector;

/// Restaurant name from the attribute-tagged page heading. `None` means the
/// page should be discarded.
pub fn restaurant_title(document: &Html) -> Option<String> {
    static_selector!(TITLE_SELECTOR <- r#"h1[data-epi-property-name="Title"]"#);
    let heading = document.select(&TITLE_SELECTOR).next()?;
    let name = collapsed_text(heading);
    (!name.is_empty()).then_some(name)
}

/// Decomposes a fully rendered snapshot into a restaurant: one block per
/// visible day, and per day the serving-hours line plus every station's
/// meals.
pub fn restaurant_from_document(name: &str, document: &Html) -> Result<Restaurant, Error> {
    static_selector!(LUNCH_DAY_SELECTOR <- ".lunch-day");
    static_selector!(MENU_PACKAGE_SELECTOR <- ".lunch-menu-block__menu-package");

    let mut restaurant = Restaurant::new(name);
    let mut hour_lines = Vec::new();
    for day_block in document.select(&LUNCH_DAY_SELECTOR) {
        if let Some(line) = day::opening_hours_line(day_block) {
            hour_lines.push(line);
        }
        for station_block in day_block.select(&MENU_PACKAGE_SELECTOR) {
            station::extract_station(&mut restaurant, station_block)?;
        }
    }
    if !hour_lines.is_empty() {
        restaurant.set_opening_hours(hour_lines.join("\n"));
    }
    Ok(restaurant)
}
