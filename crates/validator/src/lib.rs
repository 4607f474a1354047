//! # formwork-validator
//!
//! A small, composable validation library for user input.
//!
//! ## Quick start
//!
//! ```
//! use formwork_validator::prelude::*;
//!
//! let username = not_empty().and(min_length(3));
//! assert!(username.validate("alice").is_ok());
//! assert!(username.validate("al").is_err());
//! ```
//!
//! ## Pieces
//!
//! - [`Validate`] — the core trait: a check over borrowed input returning a
//!   structured [`ValidationError`].
//! - [`ValidateExt`] — fluent composition (`and`, `or`, `not`, `when`,
//!   `with_message`), implemented for every validator.
//! - [`validators`] — built-in string checks: [`NotEmpty`](validators::NotEmpty),
//!   [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength),
//!   [`Email`](validators::Email), [`MatchesRegex`](validators::MatchesRegex).
//! - [`validator!`] — declares a custom validator in one block.

// ValidationError is the return type of every check; boxing it would put an
// allocation on the failure path of each call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
mod macros;
pub mod prelude;
pub mod traits;
pub mod validators;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
