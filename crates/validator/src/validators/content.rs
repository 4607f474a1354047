//! String content and format validators.

use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::traits::Validate;

// Requires a dotted domain: `user@host` alone is not an address anyone can
// deliver to, so at least one `.label` must follow the host.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

crate::validator! {
    /// Validates email shape (`local@domain.tld`).
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email address") }
    fn email();
}

/// Validates that a string matches a regular expression.
///
/// The constructor is fallible: an invalid pattern surfaces the
/// `regex::Error` instead of panicking at validation time.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: regex::Regex,
}

impl MatchesRegex {
    /// Compiles `pattern` into a validator.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("pattern match")
                .with_param("pattern", self.pattern.as_str().to_owned()))
        }
    }
}

/// Creates a regex validator.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_dotted_addresses() {
        let v = email();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("mu@aol.com").is_ok());
        assert!(v.validate("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn email_rejects_undotted_domain() {
        let v = email();
        assert!(v.validate("aaaaa@aaaaa").is_err());
        assert!(v.validate("user@localhost").is_err());
    }

    #[test]
    fn email_rejects_malformed() {
        let v = email();
        assert!(v.validate("").is_err());
        assert!(v.validate("plainaddress").is_err());
        assert!(v.validate("@example.com").is_err());
        assert!(v.validate("user@").is_err());
        assert!(v.validate("user@.com").is_err());
    }

    #[test]
    fn email_error_shape() {
        let err = email().validate("nope").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.message, "must be a valid email address");
    }

    #[test]
    fn regex_validator_matches() {
        let v = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(v.validate("123-4567").is_ok());
        assert!(v.validate("invalid").is_err());
        assert_eq!(v.pattern(), r"^\d{3}-\d{4}$");
    }

    #[test]
    fn regex_validator_rejects_bad_pattern() {
        assert!(matches_regex("(unclosed").is_err());
    }

    #[test]
    fn regex_error_carries_pattern() {
        let v = matches_regex(r"^\d+$").unwrap();
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.param("pattern"), Some(r"^\d+$"));
    }
}
