use std::collections::HashSet;

use scraper::ElementRef;

use crate::parse::collapsed_text;
use crate::static_selector;

/// Allergen labels for one meal item, read from the abbreviation blob in the
/// name container (e.g. `"A, G, Veg"`).
pub fn extract_allergens(meal_item: ElementRef) -> HashSet<String> {
    static_selector!(ALLERGEN_SELECTOR <- "div.meal-item--name-container > p");
    let blob = meal_item
        .select(&ALLERGEN_SELECTOR)
        .next()
        .map(collapsed_text)
        .unwrap_or_default();
    map_allergen_codes(&blob)
}

/// Splits a comma-separated abbreviation blob and maps each code to its
/// descriptive label. Unrecognized codes map to the empty string, so the set
/// records that something unmapped was present. Duplicates collapse.
pub fn map_allergen_codes(blob: &str) -> HashSet<String> {
    blob.split(',')
        .map(|code| describe_allergen(code.trim()).to_string())
        .collect()
}

/// The (Finnish) abbreviation table used across the Unica pages.
fn describe_allergen(code: &str) -> &'static str {
    match code {
        "G" => "Gluten-free",
        "L" => "Lactose-free",
        "VL" => "Low lactose",
        "M" => "Dairy-free",
        "Veg" => "Suitable for vegans",
        "VS" => "Contains fresh garlic",
        "A" => "Contains allergens",
        _ => "",
    }
}
