/// Error type for contact form operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No field uses the given wire key.
    #[error("unknown field key: `{key}`")]
    UnknownField { key: String },
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        let err = FormError::UnknownField {
            key: "phone".into(),
        };
        assert_eq!(err.to_string(), "unknown field key: `phone`");
    }

    #[test]
    fn code_is_stable() {
        let err = FormError::UnknownField { key: String::new() };
        assert_eq!(err.code(), "FORM_UNKNOWN_FIELD");
    }
}
