use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

/// Joins every text node under `element` and collapses whitespace runs into
/// single spaces, approximating the text a browser would render for it.
pub fn collapsed_text(element: ElementRef) -> String {
    static RUNS: OnceLock<Regex> = OnceLock::new();
    let runs = RUNS.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    let joined = element.text().collect::<Vec<_>>().join(" ");
    runs.replace_all(&joined, " ").trim().to_string()
}
