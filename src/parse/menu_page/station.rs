use scraper::ElementRef;

use super::{allergens, nutrition, price_line};
use crate::menu::{Meal, Restaurant};
use crate::parse::{collapsed_text, Error};
use crate::static_selector;

/// Walks one menu package (a serving station) and attaches its meals to the
/// restaurant.
///
/// The station heading (label + serving window) and the price line are
/// required anchors. Each station prices all of its meals with the one
/// shared line. A blank meal name marks an intentionally empty slot and
/// stops the walk for this station; a meal whose name the restaurant
/// already carries is dropped.
pub fn extract_station(restaurant: &mut Restaurant, station: ElementRef) -> Result<(), Error> {
    static_selector!(HEADING_SELECTOR <- "h5");
    static_selector!(PRICE_LINE_SELECTOR <- "p");
    static_selector!(MEAL_ITEM_SELECTOR <- ".meal-item");

    let heading = station
        .select(&HEADING_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("every menu package should have a station heading"))?;
    let station_label = collapsed_text(heading);

    let price_element = station
        .select(&PRICE_LINE_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("every menu package should have a price line"))?;
    let (prices, price_tier) = price_line::parse_price_line(&collapsed_text(price_element))?;

    for meal_item in station.select(&MEAL_ITEM_SELECTOR) {
        let Some(name) = meal_name(meal_item, &station_label)? else {
            break;
        };
        let meal = Meal::new(
            name,
            allergens::extract_allergens(meal_item),
            nutrition::extract_macros(meal_item)?,
            price_tier,
            prices.clone(),
        );
        restaurant.add_meal(meal);
    }
    Ok(())
}

/// Meal name from the item's first text-bearing element, suffixed with the
/// station label when one exists. `Ok(None)` marks a blank slot.
fn meal_name(meal_item: ElementRef, station_label: &str) -> Result<Option<String>, Error> {
    static_selector!(NAME_SELECTOR <- "span");
    let name_element = meal_item
        .select(&NAME_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("every meal item should have a name element"))?;
    let name = collapsed_text(name_element);
    if name.is_empty() {
        return Ok(None);
    }
    if station_label.is_empty() {
        return Ok(Some(name));
    }
    Ok(Some(format!("{name} [{station_label}]")))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn station_html(body: &str) -> Html {
        Html::parse_fragment(&format!(
            r#"<div class="lunch-menu-block__menu-package">{body}</div>"#
        ))
    }

    fn station_block(html: &Html) -> ElementRef {
        static_selector!(STATION_SELECTOR <- ".lunch-menu-block__menu-package");
        html.select(&STATION_SELECTOR).next().unwrap()
    }

    fn item(name: &str) -> String {
        format!(
            r#"<div class="meal-item"><div class="meal-item--name-container"><span>{name}</span><p>G</p></div></div>"#
        )
    }

    #[test]
    fn station_label_is_appended_to_meal_names() {
        let html = station_html(&format!("<h5>Station 1-2</h5><p>12</p>{}", item("Soup")));
        let mut restaurant = Restaurant::new("Galilei");
        extract_station(&mut restaurant, station_block(&html)).unwrap();
        assert_eq!(restaurant.meals()[0].name(), "Soup [Station 1-2]");
    }

    #[test]
    fn empty_station_label_leaves_the_name_unchanged() {
        let html = station_html(&format!("<h5></h5><p>12</p>{}", item("Soup")));
        let mut restaurant = Restaurant::new("Galilei");
        extract_station(&mut restaurant, station_block(&html)).unwrap();
        assert_eq!(restaurant.meals()[0].name(), "Soup");
    }

    #[test]
    fn blank_slot_halts_the_walk_without_error() {
        let html = station_html(&format!(
            "<h5>Grill</h5><p>12</p>{}{}{}",
            item("Soup"),
            item(""),
            item("Pasta")
        ));
        let mut restaurant = Restaurant::new("Galilei");
        extract_station(&mut restaurant, station_block(&html)).unwrap();
        let names: Vec<&str> = restaurant.meals().iter().map(Meal::name).collect();
        assert_eq!(names, ["Soup [Grill]"]);
    }

    #[test]
    fn missing_heading_is_a_structural_break() {
        let html = station_html(&format!("<p>12</p>{}", item("Soup")));
        let mut restaurant = Restaurant::new("Galilei");
        assert!(extract_station(&mut restaurant, station_block(&html)).is_err());
    }

    #[test]
    fn missing_price_line_is_a_structural_break() {
        // note: no <p> anywhere in the block, the allergen paragraph would
        // otherwise satisfy the price-line anchor
        let html = station_html(
            r#"<h5>Grill</h5><div class="meal-item"><div class="meal-item--name-container"><span>Soup</span></div></div>"#,
        );
        let mut restaurant = Restaurant::new("Galilei");
        assert!(extract_station(&mut restaurant, station_block(&html)).is_err());
    }
}
