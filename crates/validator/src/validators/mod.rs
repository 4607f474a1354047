//! Built-in validators.

pub mod content;
pub mod length;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
