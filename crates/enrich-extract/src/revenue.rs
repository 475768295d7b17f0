//! Revenue cascade.
//!
//! Revenue phrases name the figure right after a keyword: "Der Umsatz
//! betrug 2,3 Mio EUR", "Gesamterlöse von 695.263,86 EUR". The unit token
//! decides scaling; everything is reported in millions. Rules expect
//! pre-lowercased text.

use regex::Regex;

use crate::numeric::parse_german_number;

const PATTERNS: [&str; 2] = [
    r"umsatz[^0-9]{0,20}([\d\.,]+)\s*(mio|millionen|mrd|milliarden)?",
    r"gesamterlöse[^0-9]{0,20}([\d\.,]+)\s*(mio|millionen|mrd|milliarden)?",
];

/// One revenue pattern: keyword, a short gap, the figure, an optional unit.
#[derive(Debug)]
pub(crate) struct RevenueRule {
    re: Regex,
}

impl RevenueRule {
    fn new(pattern: &str) -> Self {
        Self {
            re: Regex::new(pattern).expect("revenue pattern is valid"),
        }
    }

    /// Tries this rule against the text.
    ///
    /// `None` means no structural match; `Some(None)` means the pattern
    /// matched but its figure did not parse; `Some(Some(v))` is revenue in
    /// millions.
    pub(crate) fn attempt(&self, text: &str) -> Option<Option<f64>> {
        let caps = self.re.captures(text)?;
        let raw = caps.get(1).map_or("", |m| m.as_str());
        let unit = caps.get(2).map(|m| m.as_str());
        let value = parse_german_number(raw).map(|v| match unit {
            // billion-scale units normalize to millions
            Some("mrd" | "milliarden") => v * 1000.0,
            _ => v,
        });
        Some(value)
    }
}

pub(crate) fn rules() -> Vec<RevenueRule> {
    PATTERNS.iter().map(|p| RevenueRule::new(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<f64> {
        rules().iter().find_map(|rule| rule.attempt(text)).flatten()
    }

    #[test]
    fn plain_million_amount() {
        assert_eq!(extract("der umsatz betrug 2,3 mio eur"), Some(2.3));
    }

    #[test]
    fn billion_amounts_scale_to_millions() {
        assert_eq!(extract("umsatz von 1,5 mrd eur"), Some(1500.0));
        assert_eq!(extract("umsatz von 2 milliarden euro"), Some(2000.0));
    }

    #[test]
    fn million_unit_words_do_not_scale() {
        assert_eq!(extract("umsatz von 3 millionen euro"), Some(3.0));
    }

    #[test]
    fn unitless_figure_is_taken_as_is() {
        assert_eq!(extract("umsatzerlöse: 695.263,86 eur"), Some(695_263.86));
    }

    #[test]
    fn gesamterloese_is_a_fallback_keyword() {
        assert_eq!(extract("die gesamterlöse lagen bei 4,0 mio"), Some(4.0));
    }

    #[test]
    fn no_keyword_means_no_revenue() {
        assert_eq!(extract("die bilanzsumme betrug 1.000.000,00"), None);
    }

    #[test]
    fn first_structural_match_wins_even_when_malformed() {
        // The umsatz rule latches onto the bare comma and fails to parse
        // it; the gesamterlöse rule never gets a turn. Known trade-off of
        // the first-match contract.
        let text = "der umsatz , wie in der anlage dargestellt. gesamterlöse 2,5 mio eur";
        assert_eq!(extract(text), None);
    }
}
