use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Local part: alphanumeric runs joined by single dots or underscores,
    // so no leading/trailing punctuation and no doubled separators.
    // Domain: alphanumeric, a 2+ letter extension, optionally one
    // second-level extension (e.g. "abc.co.in").
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9]+([._][A-Za-z0-9]+)*@[A-Za-z0-9]+\.[A-Za-z]{2,}(\.[A-Za-z]{2,})?$"
    )
    .unwrap();
}

/// Syntax check applied to every address as it is converted for the wire.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_REGEX.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(is_valid_email("Julia@007.com"));
        assert!(is_valid_email("Julia.007@abc.com"));
        assert!(is_valid_email("to@test.com"));
        assert!(is_valid_email("a_b@test.co.in"));
    }

    #[test]
    fn rejects_missing_at_or_domain() {
        assert!(!is_valid_email("JuliaZ007"));
        assert!(!is_valid_email("test.com"));
        assert!(!is_valid_email("_Julia007.com"));
        assert!(!is_valid_email("Julia.abc@"));
        assert!(!is_valid_email("Samantha@com"));
        assert!(!is_valid_email("Samantha_21."));
    }

    #[test]
    fn rejects_malformed_local_parts() {
        assert!(!is_valid_email(".1Samantha"));
        assert!(!is_valid_email("_Julia007@abc.co.in"));
        assert!(!is_valid_email("a..b@test.com"));
        assert!(!is_valid_email("a.@test.com"));
    }

    #[test]
    fn rejects_malformed_domains() {
        assert!(!is_valid_email("Samantha@10_2A"));
        assert!(!is_valid_email("a@test.c"));
        assert!(!is_valid_email("a@test.com.co.in"));
    }
}
