//! Employee count cascade.
//!
//! Head counts appear in narrative form ("Im Geschäftsjahr waren 12
//! Mitarbeiter beschäftigt", "durchschnittlich 38 Arbeitnehmer") or as an
//! explicit zero ("keine Mitarbeiter beschäftigt"). The extracted value is
//! a lower bound on head count. Rules expect pre-lowercased text.

use regex::Regex;

const COUNT_PATTERNS: [&str; 3] = [
    r"(\d{1,4})\s+(mitarbeiter|beschäftigte|angestellte|personen)",
    r"es waren\s+(\d{1,4})\s+(mitarbeiter|angestellte)",
    r"durchschnittlich[^0-9]{0,15}(\d{1,4})\s+(mitarbeiter|arbeitnehmer)",
];

const ZERO_PATTERN: &str = r"keine\s+(?:mitarbeiter|arbeitnehmer|personen)\s+(?:beschäftigt|angestellt|tätig)";

/// One employee pattern, either capturing a count or asserting zero.
#[derive(Debug)]
pub(crate) enum EmployeeRule {
    /// Captures a 1-4 digit count in group 1.
    Count(Regex),
    /// Matches the explicit zero-employees phrasing; captures nothing.
    Zero(Regex),
}

impl EmployeeRule {
    /// Tries this rule against the text.
    ///
    /// `None` means no structural match; `Some(None)` means the pattern
    /// matched but its count did not parse; `Some(Some(n))` is the count.
    /// The zero rule always yields `Some(Some(0))` on a match.
    pub(crate) fn attempt(&self, text: &str) -> Option<Option<u32>> {
        match self {
            Self::Count(re) => {
                let caps = re.captures(text)?;
                let raw = caps.get(1).map_or("", |m| m.as_str());
                Some(raw.parse::<u32>().ok())
            }
            Self::Zero(re) => {
                re.find(text)?;
                Some(Some(0))
            }
        }
    }
}

pub(crate) fn rules() -> Vec<EmployeeRule> {
    let mut rules: Vec<EmployeeRule> = COUNT_PATTERNS
        .iter()
        .map(|p| EmployeeRule::Count(Regex::new(p).expect("employee pattern is valid")))
        .collect();
    rules.push(EmployeeRule::Zero(
        Regex::new(ZERO_PATTERN).expect("zero-employees pattern is valid"),
    ));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<u32> {
        rules().iter().find_map(|rule| rule.attempt(text)).flatten()
    }

    #[test]
    fn count_with_noun() {
        assert_eq!(
            extract("es waren im durchschnitt 45 mitarbeiter beschäftigt"),
            Some(45)
        );
        assert_eq!(extract("zum stichtag 7 angestellte tätig"), Some(7));
    }

    #[test]
    fn durchschnittlich_covers_arbeitnehmer() {
        // "arbeitnehmer" is not a noun of the plain count rule
        assert_eq!(
            extract("im jahresmittel durchschnittlich 38 arbeitnehmer"),
            Some(38)
        );
    }

    #[test]
    fn explicit_zero_phrasing_yields_zero() {
        assert_eq!(extract("keine mitarbeiter beschäftigt"), Some(0));
        assert_eq!(
            extract("zum jahresende waren keine arbeitnehmer angestellt"),
            Some(0)
        );
    }

    #[test]
    fn no_phrase_yields_none_not_zero() {
        assert_eq!(extract("die gesellschaft wurde 2022 gegründet"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn count_rules_run_before_the_zero_rule() {
        let text = "120 mitarbeiter im vorjahr, im berichtsjahr keine mitarbeiter beschäftigt";
        assert_eq!(extract(text), Some(120));
    }
}
