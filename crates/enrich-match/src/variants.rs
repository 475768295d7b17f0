//! Search variant generation and legal-form detection.
//!
//! Registry search handles exact names poorly. A collected name like
//! "Muster Stahlbau GmbH & Co. KG, Berlin" often only returns results when
//! queried as "Muster Stahlbau", "MUSTER STAHLBAU", or just "muster".
//! [`VariantGenerator`] derives that family of queries from a raw name.

use regex::Regex;
use std::collections::BTreeSet;

/// Legal-form tokens stripped during cleaning, longest phrases first so the
/// alternation never leaves a dangling "& co. kg" behind.
const LEGAL_FORM_PATTERN: &str =
    r"\b(gmbh & co\. kg|gesellschaft mit beschränkter haftung|gmbh|ag|kg|mbh)\b";

/// Everything from the first comma, pipe, or opening parenthesis onward is
/// location or branch noise ("Muster GmbH, Berlin", "Muster (Holding)").
const TRAILING_PATTERN: &str = r"[,|(].*";

const WHITESPACE_PATTERN: &str = r"\s+";

/// Derives registry search variants from a raw company name.
///
/// The generator owns its compiled patterns; construct it once and reuse it
/// across resolutions.
#[derive(Debug)]
pub struct VariantGenerator {
    legal_forms: Regex,
    trailing: Regex,
    whitespace: Regex,
}

impl VariantGenerator {
    /// Creates a generator with the default cleaning patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            legal_forms: Regex::new(LEGAL_FORM_PATTERN).expect("legal-form pattern is valid"),
            trailing: Regex::new(TRAILING_PATTERN).expect("trailing pattern is valid"),
            whitespace: Regex::new(WHITESPACE_PATTERN).expect("whitespace pattern is valid"),
        }
    }

    /// Returns the set of search variants for a name.
    ///
    /// The set always contains the trimmed original name, plus title-case,
    /// upper-case, no-space, and first-token forms of the cleaned name.
    /// Duplicates collapse via set semantics. A name consisting only of a
    /// legal form cleans down to nothing and contributes an empty-string
    /// variant; callers skip empties before querying.
    #[must_use]
    pub fn variants(&self, name: &str) -> BTreeSet<String> {
        let cleaned = self.clean(name);
        let first_token = cleaned.split_whitespace().next().unwrap_or_default();

        let mut variants = BTreeSet::new();
        variants.insert(name.trim().to_string());
        variants.insert(title_case(&cleaned));
        variants.insert(cleaned.to_uppercase());
        variants.insert(cleaned.replace(' ', ""));
        variants.insert(first_token.to_string());
        variants
    }

    /// Detects the legal form in a name, in canonical spelling.
    ///
    /// The spelled-out "Gesellschaft mit beschränkter Haftung" maps to
    /// "GmbH". Returns `None` when the name carries no recognized form.
    #[must_use]
    pub fn legal_form(&self, name: &str) -> Option<String> {
        let lowered = name.to_lowercase();
        let matched = self.legal_forms.find(&lowered)?;
        let canonical = match matched.as_str() {
            "gmbh & co. kg" => "GmbH & Co. KG",
            "gesellschaft mit beschränkter haftung" | "gmbh" => "GmbH",
            "ag" => "AG",
            "kg" => "KG",
            "mbh" => "mbH",
            _ => return None,
        };
        Some(canonical.to_string())
    }

    /// Lower-cases, strips legal forms and trailing noise, collapses
    /// whitespace.
    fn clean(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        let stripped = self.legal_forms.replace_all(&lowered, "");
        let stripped = self.trailing.replace_all(&stripped, "");
        self.whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalizes the first letter of every word, lower-casing the rest.
///
/// Word starts are positions after any non-alphabetic character, so
/// "süd-chemie" becomes "Süd-Chemie" and "3m deutschland" becomes
/// "3M Deutschland".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_include_untouched_original() {
        let generator = VariantGenerator::new();
        let variants = generator.variants("  Muster Stahlbau GmbH & Co. KG ");
        assert!(variants.contains("Muster Stahlbau GmbH & Co. KG"));
    }

    #[test]
    fn variants_strip_legal_form() {
        let generator = VariantGenerator::new();
        let variants = generator.variants("Muster Stahlbau GmbH & Co. KG");
        assert!(variants.contains("Muster Stahlbau"));
        assert!(variants.contains("MUSTER STAHLBAU"));
        assert!(variants.contains("musterstahlbau"));
        assert!(variants.contains("muster"));
    }

    #[test]
    fn variants_strip_comma_suffix() {
        let generator = VariantGenerator::new();
        let variants = generator.variants("Muster GmbH, Berlin");
        assert!(variants.contains("Muster"));
        assert!(variants.contains("MUSTER"));
        // The original keeps its suffix.
        assert!(variants.contains("Muster GmbH, Berlin"));
        assert!(!variants.contains("Muster Gmbh, Berlin"));
    }

    #[test]
    fn variants_strip_parenthetical() {
        let generator = VariantGenerator::new();
        let variants = generator.variants("Muster (Holding) AG");
        assert!(variants.contains("Muster"));
    }

    #[test]
    fn variants_deduplicate() {
        let generator = VariantGenerator::new();
        // clean form is a single lowercase word, so no-space and
        // first-token collapse into one entry
        let variants = generator.variants("muster gmbh");
        assert_eq!(
            variants.into_iter().collect::<Vec<_>>(),
            vec!["MUSTER", "Muster", "muster", "muster gmbh"]
        );
    }

    #[test]
    fn legal_form_only_name_yields_empty_variant() {
        let generator = VariantGenerator::new();
        let variants = generator.variants("GmbH");
        assert!(variants.contains(""));
        assert!(variants.contains("GmbH"));
    }

    #[test]
    fn legal_form_inside_word_is_kept() {
        let generator = VariantGenerator::new();
        // "ag" in "magdeburg" is not a word of its own
        let variants = generator.variants("Magdeburger Hafen");
        assert!(variants.contains("Magdeburger Hafen"));
        assert!(variants.contains("magdeburgerhafen"));
    }

    #[test]
    fn detects_legal_forms() {
        let generator = VariantGenerator::new();
        assert_eq!(generator.legal_form("Muster GmbH").as_deref(), Some("GmbH"));
        assert_eq!(
            generator
                .legal_form("Muster Stahlbau GmbH & Co. KG")
                .as_deref(),
            Some("GmbH & Co. KG")
        );
        assert_eq!(generator.legal_form("Hansa AG").as_deref(), Some("AG"));
        assert_eq!(
            generator
                .legal_form("Beispiel Gesellschaft mit beschränkter Haftung")
                .as_deref(),
            Some("GmbH")
        );
        assert_eq!(generator.legal_form("Stadtwerke Musterstadt"), None);
    }

    #[test]
    fn title_cases_hyphens_and_digits() {
        assert_eq!(title_case("muster stahlbau"), "Muster Stahlbau");
        assert_eq!(title_case("süd-chemie"), "Süd-Chemie");
        assert_eq!(title_case("3m deutschland"), "3M Deutschland");
        assert_eq!(title_case(""), "");
    }
}
