use scraper::ElementRef;

use crate::parse::collapsed_text;
use crate::static_selector;

/// Serving-hours display line for one day block, e.g. `"Mon: 10.30-14.00"`.
///
/// The day label is the first token of the day heading and replaces the
/// fixed "Lunch served " phrase, because the weekly opening hours live
/// elsewhere on the page. `None` when the day block carries no heading or
/// hours paragraph; that is a data gap, not an error.
pub fn opening_hours_line(day_block: ElementRef) -> Option<String> {
    static_selector!(DAY_HEADING_SELECTOR <- "h4");
    static_selector!(HOURS_SELECTOR <- "p");

    let heading = day_block.select(&DAY_HEADING_SELECTOR).next()?;
    let day_label = collapsed_text(heading);
    let day_label = day_label.split_whitespace().next()?;

    let hours = day_block.select(&HOURS_SELECTOR).next()?;
    let line = collapsed_text(hours)
        .replace("Lunch served ", &format!("{day_label}: "))
        .replace('–', "-");
    Some(line.trim().to_string())
}
