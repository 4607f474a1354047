//! The core `Validate` trait and its combinator extension.

use crate::combinators::{And, Not, Or, When, WithMessage};
use crate::error::ValidationError;

/// A check that either accepts a borrowed input or explains why it was
/// rejected.
///
/// Validators are generic over their input type; `Input` may be `?Sized` so
/// that `str` and `[T]` validate without allocation.
///
/// # Examples
///
/// ```
/// use formwork_validator::{Validate, ValidationError};
///
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("abc").is_ok());
/// assert!(MinLength { min: 3 }.validate("ab").is_err());
/// ```
pub trait Validate {
    /// The type being validated.
    type Input: ?Sized;

    /// Checks the input, returning the failure when the rule does not hold.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// Fluent composition methods, implemented for every validator.
///
/// ```
/// use formwork_validator::prelude::*;
///
/// let username = not_empty().and(min_length(3));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator: passes when the inner check fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Runs the validator only when `condition` holds; passes otherwise.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Replaces the failure message with `message`, keeping the error code.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "always fails"))
        }
    }

    #[test]
    fn trait_object_safe_over_input() {
        let validators: Vec<Box<dyn Validate<Input = str>>> =
            vec![Box::new(AlwaysValid), Box::new(AlwaysFails)];
        assert!(validators[0].validate("x").is_ok());
        assert!(validators[1].validate("x").is_err());
    }

    #[test]
    fn ext_methods_compose() {
        assert!(AlwaysValid.and(AlwaysValid).validate("x").is_ok());
        assert!(AlwaysValid.and(AlwaysFails).validate("x").is_err());
        assert!(AlwaysFails.or(AlwaysValid).validate("x").is_ok());
        assert!(AlwaysFails.not().validate("x").is_ok());
    }
}
