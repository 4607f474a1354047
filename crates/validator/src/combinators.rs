//! Logical combinators over validators.
//!
//! Each combinator is itself a validator, so compositions nest freely:
//! `a.and(b).or(c.not())`.

use std::borrow::Cow;

use crate::error::ValidationError;
use crate::traits::Validate;

/// Logical AND: both validators must pass.
///
/// Reports the first failure; the right validator does not run when the
/// left one rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Logical OR: at least one validator must pass.
///
/// When both fail, the right validator's error is reported — the later
/// alternative is assumed to be the more specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.left.validate(input).is_ok() {
            return Ok(());
        }
        self.right.validate(input)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Logical NOT: passes when the inner validator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new("not", "must not match the inner rule")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

/// Conditional validation: the inner validator runs only when the
/// predicate holds for the input; otherwise the check passes.
///
/// ```
/// use formwork_validator::prelude::*;
///
/// // Format is only enforced once something has been typed.
/// let validator = email().when(|s: &str| !s.is_empty());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    inner: V,
    condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<V, C>(inner: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(inner, condition)
}

/// Replaces the failure message of the inner validator.
///
/// The error code, field, and params are preserved so programmatic handling
/// still sees which rule failed.
///
/// ```
/// use formwork_validator::prelude::*;
///
/// let validator = min_length(5).with_message("firstName must have at least 5 characters");
/// let error = validator.validate("Max").unwrap_err();
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.message, "firstName must have at least 5 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Cow::Owned(message.into()),
        }
    }

    /// The replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|error| error.with_message(self.message.clone()))
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V: Validate>(inner: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(inner, message)
}
