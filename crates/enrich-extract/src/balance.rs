//! Balance-sheet total cascade.
//!
//! The total appears in several layouts: a labelled "Summe Aktiva/Passiva"
//! line, a compact "Aktiva <n> Passiva <n>" pair, or a bare side heading
//! followed by the figure. Rules run from the most explicit phrasing down
//! to the bare headings, which demand at least six figure characters to
//! avoid swallowing stray small numbers. Rules expect pre-lowercased text.

use regex::Regex;

use crate::numeric::parse_german_number;

/// Pattern plus the capture group holding the figure. The compact
/// aktiva/passiva pair keeps the passiva side.
const PATTERNS: [(&str, usize); 5] = [
    (r"summe\s+(aktiva|passiva)[^\d]{0,20}([\d\.,]+)", 2),
    (r"aktiva\s+[\d\.,]+\s+passiva\s+([\d\.,]+)", 1),
    (r"passiva\s+([\d\.,]+)", 1),
    (r"aktiva[^\d]{0,20}([\d\.,]{6,})", 1),
    (r"passiva[^\d]{0,20}([\d\.,]{6,})", 1),
];

/// One balance-sheet pattern with its figure capture group.
#[derive(Debug)]
pub(crate) struct BalanceRule {
    re: Regex,
    group: usize,
}

impl BalanceRule {
    fn new(pattern: &str, group: usize) -> Self {
        Self {
            re: Regex::new(pattern).expect("balance pattern is valid"),
            group,
        }
    }

    /// Tries this rule against the text.
    ///
    /// `None` means no structural match; `Some(None)` means the pattern
    /// matched but its figure did not parse; `Some(Some(v))` is the total
    /// as printed.
    pub(crate) fn attempt(&self, text: &str) -> Option<Option<f64>> {
        let caps = self.re.captures(text)?;
        let raw = caps.get(self.group).map_or("", |m| m.as_str());
        Some(parse_german_number(raw))
    }
}

pub(crate) fn rules() -> Vec<BalanceRule> {
    PATTERNS
        .iter()
        .map(|&(pattern, group)| BalanceRule::new(pattern, group))
        .collect()
}
