//! Convenient single-import surface.
//!
//! ```
//! use formwork_validator::prelude::*;
//!
//! let name = not_empty().and(min_length(3)).and(max_length(64));
//! assert!(name.validate("alice").is_ok());
//! ```

pub use crate::combinators::{
    And, Not, Or, When, WithMessage, and, not, or, when, with_message,
};
pub use crate::error::{ValidationError, ValidationErrors};
pub use crate::traits::{Validate, ValidateExt};
pub use crate::validators::{
    Email, MatchesRegex, MaxLength, MinLength, NotEmpty, email, matches_regex, max_length,
    min_length, not_empty,
};
