use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::menu::{Eur, PriceTier, Prices};
use crate::parse::Error;

/// Parses a station's raw price line (e.g. `"3,10 / 7,70 / 9,20 €"` or just
/// `"12"`) into per-audience prices and the derived tier.
///
/// Tokens containing the letter `g` are weight annotations leaking into the
/// line and are discarded before validation. If the first surviving token is
/// not a decimal number (or no token survives), every price stays unset and
/// the tier is derived from the default value — no error. A non-numeric
/// token after a valid first one, however, means the line's shape changed
/// upstream and is reported.
pub fn parse_price_line(raw: &str) -> Result<(Prices, PriceTier), Error> {
    let tokens: Vec<String> = raw
        .split('/')
        .filter(|token| !token.contains('g'))
        .map(|token| token.replace(',', ".").replace(['€', ' '], ""))
        .collect();

    let prices = if tokens.first().is_some_and(|first| is_decimal(first)) {
        let mut amounts = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let amount = Decimal::from_str(token).map_err(|_| {
                Error::number_parse_error(&format!("price token {token:?} is not a number"))
            })?;
            amounts.push(amount);
        }
        Prices::from_amounts(&amounts)
    } else {
        Prices::default()
    };

    let student_price = prices.students().map_or_else(Decimal::default, Eur::amount);
    let tier = PriceTier::from_student_price(student_price);
    Ok((prices, tier))
}

/// Decimal-number grammar: optional sign, optional grouped thousands,
/// optional fractional part.
fn is_decimal(token: &str) -> bool {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    let grammar = GRAMMAR.get_or_init(|| {
        Regex::new(r"^(?:-[1-9](?:\d{0,2}(?:,\d{3})+|\d*)|0|[1-9](?:\d{0,2}(?:,\d{3})+|\d*))(?:\.\d+)?$")
            .expect("regex should be valid")
    });
    grammar.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn single_token_prices_every_audience() {
        let (prices, tier) = parse_price_line("12").unwrap();
        assert_eq!(prices.students().unwrap().amount(), dec("12"));
        assert_eq!(prices.others().unwrap().amount(), dec("12"));
        assert_eq!(tier, PriceTier::Special);
    }

    #[test]
    fn three_tokens_with_currency_sign() {
        let (prices, tier) = parse_price_line("3,10 / 7,70 / 9,20 €").unwrap();
        assert_eq!(prices.students().unwrap().amount(), dec("3.10"));
        assert_eq!(prices.researcher_students().unwrap().amount(), dec("7.70"));
        assert_eq!(prices.staff().unwrap().amount(), dec("9.20"));
        assert_eq!(prices.others().unwrap().amount(), dec("9.20"));
        assert_eq!(tier, PriceTier::Normal);
    }

    #[test]
    fn weight_annotations_are_discarded_before_validation() {
        let (prices, _) = parse_price_line("250g / 3,10").unwrap();
        // one surviving token, so it covers every audience
        assert_eq!(prices.students().unwrap().amount(), dec("3.10"));
        assert_eq!(prices.staff().unwrap().amount(), dec("3.10"));
    }

    #[test]
    fn invalid_first_token_leaves_prices_unset() {
        let (prices, tier) = parse_price_line("sold out").unwrap();
        assert_eq!(prices, Prices::default());
        // derived from the default value; callers only trust the tier when
        // prices were actually assigned
        assert_eq!(tier, PriceTier::Other);
    }

    #[test]
    fn empty_token_list_leaves_prices_unset() {
        let (prices, _) = parse_price_line("250g").unwrap();
        assert_eq!(prices, Prices::default());
    }

    #[test]
    fn five_tokens_leave_prices_unset() {
        let (prices, _) = parse_price_line("1 / 2 / 3 / 4 / 5").unwrap();
        assert_eq!(prices, Prices::default());
    }

    #[test]
    fn invalid_later_token_is_a_structural_break() {
        assert!(parse_price_line("3,10 / oops").is_err());
    }

    #[test]
    fn decimal_grammar() {
        for valid in ["12", "3.10", "0.5", "-1.25", "1,234.56", "0"] {
            assert!(is_decimal(valid), "{valid}");
        }
        for invalid in ["", "12.", "1.2.3", "abc", "-0", "01"] {
            assert!(!is_decimal(invalid), "{invalid}");
        }
    }
}
