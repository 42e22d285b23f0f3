use scraper::ElementRef;

use crate::menu::{MacroValue, Macros};
use crate::parse::{collapsed_text, Error};
use crate::static_selector;

/// Parses the nutrient table of one meal item.
///
/// The first row is a "per 100g" header and is discarded; the row after it
/// carries the energy cell (`"754 kJ, 180 kcal"`), whose second-to-last
/// token is the calorie amount. Remaining rows map lower-cased nutrient
/// names to (amount, unit). Saturated fat is folded into the fat entry
/// upstream and is never stored separately.
///
/// `Ok(None)` when there is no table, or no rows beyond the header — a meal
/// without published nutrition facts is not an error.
pub fn extract_macros(meal_item: ElementRef) -> Result<Option<Macros>, Error> {
    static_selector!(ROW_SELECTOR <- "tr");
    static_selector!(CELL_SELECTOR <- "td, th");

    let mut rows = meal_item.select(&ROW_SELECTOR);
    if rows.next().is_none() {
        // no table at all
        return Ok(None);
    }
    let Some(energy_row) = rows.next() else {
        return Ok(None);
    };

    let energy_cell = energy_row
        .select(&CELL_SELECTOR)
        .last()
        .ok_or_else(|| Error::html_parse_error("the energy row should have cells"))?;
    let energy_text = collapsed_text(energy_cell);
    let kcal_token = energy_text.split_whitespace().rev().nth(1).ok_or_else(|| {
        Error::html_parse_error("the energy cell should read like \"754 kJ, 180 kcal\"")
    })?;
    let kcal: f32 = kcal_token.parse().map_err(|_| {
        Error::number_parse_error(&format!("calorie amount {kcal_token:?} is not a number"))
    })?;

    let mut macros = Macros::new(MacroValue::new(kcal, "kcal"));
    for row in rows {
        let text = collapsed_text(row).to_lowercase();
        if text.starts_with("saturated") {
            continue;
        }
        let mut parts = text.split_whitespace();
        let (Some(name), Some(amount), Some(unit)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::html_parse_error(
                "nutrient rows should read like \"protein 12 g\"",
            ));
        };
        let amount: f32 = amount.parse().map_err(|_| {
            Error::number_parse_error(&format!("nutrient amount {amount:?} is not a number"))
        })?;
        macros.insert(name, MacroValue::new(amount, unit));
    }
    Ok(Some(macros))
}
