//! The extractor facade over all cascades.
//!
//! [`ReportExtractor`] compiles its rule cascades once and can be reused
//! across reports. The baseline extractor mines revenue and employee count;
//! [`ReportExtractor::extended`] adds the balance-sheet total.

use crate::balance::{self, BalanceRule};
use crate::employees::{self, EmployeeRule};
use crate::revenue::{self, RevenueRule};

/// Facts mined from one report body.
///
/// Fields are independently optional: a report may state revenue without
/// head count, or neither. Absent is not zero; an explicit zero-employees
/// phrase yields `Some(0)`, a missing phrase yields `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedFacts {
    /// Revenue in millions.
    pub revenue_millions: Option<f64>,
    /// Lower bound on head count.
    pub employee_count: Option<u32>,
    /// Balance-sheet total as printed. Only the extended extractor fills
    /// this.
    pub balance_sheet_total: Option<f64>,
}

impl ExtractedFacts {
    /// Returns true when no field was extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.revenue_millions.is_none()
            && self.employee_count.is_none()
            && self.balance_sheet_total.is_none()
    }
}

/// Runs the pattern-rule cascades over report bodies.
#[derive(Debug)]
pub struct ReportExtractor {
    revenue: Vec<RevenueRule>,
    employees: Vec<EmployeeRule>,
    balance: Option<Vec<BalanceRule>>,
}

impl ReportExtractor {
    /// Creates the baseline extractor: revenue and employee count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revenue: revenue::rules(),
            employees: employees::rules(),
            balance: None,
        }
    }

    /// Creates the extended extractor, which also mines the balance-sheet
    /// total.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            balance: Some(balance::rules()),
            ..Self::new()
        }
    }

    /// Extracts facts from a report body.
    ///
    /// The body is case-folded once; every cascade stops at its first
    /// structural match.
    #[must_use]
    pub fn extract(&self, body: &str) -> ExtractedFacts {
        let text = body.to_lowercase();
        ExtractedFacts {
            revenue_millions: self
                .revenue
                .iter()
                .find_map(|rule| rule.attempt(&text))
                .flatten(),
            employee_count: self
                .employees
                .iter()
                .find_map(|rule| rule.attempt(&text))
                .flatten(),
            balance_sheet_total: self.balance.as_ref().and_then(|rules| {
                rules.iter().find_map(|rule| rule.attempt(&text)).flatten()
            }),
        }
    }
}

impl Default for ReportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_revenue_and_head_count() {
        let extractor = ReportExtractor::new();
        let facts = extractor.extract(
            "Der Umsatz betrug 4,2 Mio EUR. Im Geschäftsjahr waren 12 Mitarbeiter beschäftigt.",
        );
        assert_eq!(facts.revenue_millions, Some(4.2));
        assert_eq!(facts.employee_count, Some(12));
        assert_eq!(facts.balance_sheet_total, None);
    }

    #[test]
    fn case_folds_before_matching() {
        let extractor = ReportExtractor::new();
        let facts = extractor.extract("UMSATZ VON 1,5 MRD EUR");
        assert_eq!(facts.revenue_millions, Some(1500.0));
    }

    #[test]
    fn explicit_zero_head_count() {
        let extractor = ReportExtractor::new();
        let facts = extractor.extract("Es waren keine Mitarbeiter beschäftigt.");
        assert_eq!(facts.employee_count, Some(0));
    }

    #[test]
    fn silence_yields_absent_fields() {
        let extractor = ReportExtractor::new();
        let facts = extractor.extract("Die Gesellschaft hat ihren Sitz in Musterstadt.");
        assert_eq!(facts, ExtractedFacts::default());
        assert!(facts.is_empty());
    }

    #[test]
    fn baseline_ignores_balance_sheet_lines() {
        let body = "Summe Aktiva 1.000.000,00";
        let baseline = ReportExtractor::new().extract(body);
        assert_eq!(baseline.balance_sheet_total, None);

        let extended = ReportExtractor::extended().extract(body);
        assert_eq!(extended.balance_sheet_total, Some(1_000_000.0));
    }

    #[test]
    fn cascades_are_independent() {
        let extractor = ReportExtractor::extended();
        let facts = extractor.extract("Gesamterlöse von 2,5 Mio EUR. Passiva 500.000,00");
        assert_eq!(facts.revenue_millions, Some(2.5));
        assert_eq!(facts.employee_count, None);
        assert_eq!(facts.balance_sheet_total, Some(500_000.0));
    }
}
