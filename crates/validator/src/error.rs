//! Error types for validation failures.
//!
//! String fields use `Cow<'static, str>` so the common case of static error
//! codes and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// A structured validation failure.
///
/// The `code` identifies the rule that failed (`"min_length"`,
/// `"invalid_format"`, ...), the `message` is the user-facing text, `field`
/// names the input the error belongs to, and `params` carry the rule's
/// concrete bounds for message templating.
///
/// # Examples
///
/// ```
/// use formwork_validator::ValidationError;
///
/// let error = ValidationError::new("min_length", "too short")
///     .with_field("firstName")
///     .with_param("min", "5");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Rule identifier for programmatic handling.
    pub code: Cow<'static, str>,

    /// Human-readable message shown to the user.
    pub message: Cow<'static, str>,

    /// The field this error is attached to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters of the failed rule, e.g. `[("min", "5"), ("actual", "3")]`.
    /// Inline storage for the common case of 0-2 entries.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error from a code and a message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Attaches a field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a rule parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the user-facing message, keeping code, field, and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "not_empty" error.
    pub fn not_empty() -> Self {
        Self::new("not_empty", "must not be empty")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("must have at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("must have at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("must be a valid {expected}"))
            .with_param("expected", expected)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", field, self.code, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// An ordered collection of validation errors.
///
/// Used when several independent checks run against the same submission and
/// every failure should be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error from `errors`.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Whether any error has been collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected errors, in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to `Ok(ok_value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_code_and_message() {
        let error = ValidationError::new("test", "test message");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "test message");
        assert!(error.field.is_none());
        assert!(error.params.is_empty());
    }

    #[test]
    fn with_field_and_params() {
        let error = ValidationError::new("min_length", "too short")
            .with_field("firstName")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.field.as_deref(), Some("firstName"));
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn with_message_keeps_code_and_params() {
        let error = ValidationError::min_length(5, 3).with_message("custom text");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.message, "custom text");
        assert_eq!(error.param("min"), Some("5"));
    }

    #[test]
    fn display_includes_field_when_set() {
        let bare = ValidationError::new("code", "msg");
        assert_eq!(bare.to_string(), "code: msg");

        let fielded = ValidationError::new("code", "msg").with_field("email");
        assert_eq!(fielded.to_string(), "[email] code: msg");
    }

    #[test]
    fn static_strings_stay_borrowed() {
        let error = ValidationError::new("not_empty", "must not be empty");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn convenience_constructors() {
        let error = ValidationError::min_length(5, 2);
        assert_eq!(error.code, "min_length");
        assert!(error.message.contains("at least 5"));

        let error = ValidationError::max_length(10, 12);
        assert_eq!(error.code, "max_length");
        assert_eq!(error.param("actual"), Some("12"));

        let error = ValidationError::invalid_format("email address");
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.message, "must be a valid email address");
    }

    #[test]
    fn collection_add_and_len() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());

        errors.add(ValidationError::new("a", "first"));
        errors.add(ValidationError::new("b", "second"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.errors()[0].code, "a");
    }

    #[test]
    fn collection_into_result() {
        let empty = ValidationErrors::new();
        assert_eq!(empty.into_result(42), Ok(42));

        let full: ValidationErrors = [ValidationError::new("a", "x")].into_iter().collect();
        assert!(full.into_result(42).is_err());
    }

    #[test]
    fn collection_display_numbers_entries() {
        let errors: ValidationErrors = [
            ValidationError::new("a", "first"),
            ValidationError::new("b", "second"),
        ]
        .into_iter()
        .collect();

        let rendered = errors.to_string();
        assert!(rendered.contains("2 error(s)"));
        assert!(rendered.contains("1. a: first"));
        assert!(rendered.contains("2. b: second"));
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let error = ValidationError::new("not_empty", "must not be empty");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("field"));
        assert!(!json.contains("params"));
    }
}
