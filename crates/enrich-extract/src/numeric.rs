//! German numeric normalization.
//!
//! Disclosure bodies print numbers the German way: dots as thousands
//! separators, a comma as the decimal mark ("695.263,86").

/// Parses a number written in German convention.
///
/// Thousands dots are removed, the decimal comma becomes a dot, and the
/// result is parsed as `f64`. Returns `None` for anything that does not
/// survive normalization (multiple commas, bare separators, empty input).
#[must_use]
pub fn parse_german_number(raw: &str) -> Option<f64> {
    let normalized = raw.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_german_convention() {
        assert_eq!(parse_german_number("695.263,86"), Some(695_263.86));
        assert_eq!(parse_german_number("48.670.387,13"), Some(48_670_387.13));
        assert_eq!(parse_german_number("1,5"), Some(1.5));
        assert_eq!(parse_german_number("2022"), Some(2022.0));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_german_number("1,2,3"), None);
        assert_eq!(parse_german_number(","), None);
        assert_eq!(parse_german_number("."), None);
        assert_eq!(parse_german_number(""), None);
    }
}
