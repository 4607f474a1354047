//! # formwork-contact
//!
//! The contact form core: typed fields, form state, validation policy, and
//! the submission state machine, plus the text contract a presentation
//! layer renders.
//!
//! ## Flow
//!
//! ```
//! use formwork_contact::prelude::*;
//!
//! let mut form = FormState::new();
//! form.set_field(Field::FirstName, "Theresa");
//! form.set_field(Field::LastName, "Underwood");
//! form.set_field(Field::Email, "mu@aol.com");
//!
//! let SubmitOutcome::Accepted(snapshot) = form.submit() else {
//!     panic!("all required fields were valid");
//! };
//! assert_eq!(view::summary_lines(&snapshot)[0], "First Name: Theresa");
//! ```
//!
//! Validation runs at two moments: change-time checks fire as the user
//! types (firstName's length, email's format once non-empty), and
//! submit-time checks cover every required field. See [`FormState`] for the
//! operations and [`view`] for what a binding renders.

pub mod error;
pub mod field;
mod rules;
pub mod state;
pub mod submit;
pub mod view;

pub use error::FormError;
pub use field::Field;
pub use state::{FieldErrors, FormState, FormValues, Snapshot};
pub use submit::SubmitOutcome;

pub mod prelude {
    pub use crate::error::FormError;
    pub use crate::field::Field;
    pub use crate::state::{FieldErrors, FormState, FormValues, Snapshot};
    pub use crate::submit::SubmitOutcome;
    pub use crate::view;
}
