//! The presentation contract.
//!
//! The rendering layer is an external collaborator; this module gives it
//! everything it binds to the screen: static texts, input labels, the
//! ordered error lines, and the post-submit summary lines. Everything here
//! is plain data — no widget toolkit leaks into the core.

use crate::field::Field;
use crate::state::{FormState, Snapshot};

/// The form's header text.
pub const HEADER: &str = "Contact Form";

/// The accessible text of the submit control.
pub const SUBMIT_LABEL: &str = "Submit";

/// Prefix attached to every rendered error line.
const ERROR_PREFIX: &str = "Error: ";

/// The `(wire key, label)` pair for every input, in display order.
#[must_use]
pub fn input_labels() -> [(&'static str, &'static str); 4] {
    [
        (Field::FirstName.key(), Field::FirstName.label()),
        (Field::LastName.key(), Field::LastName.label()),
        (Field::Email.key(), Field::Email.label()),
        (Field::Message.key(), Field::Message.label()),
    ]
}

/// The currently visible error lines, in display order.
///
/// Each line is prefixed with `Error: ` so a binding can render them
/// directly and a test can count fields in error by counting lines
/// containing `error` case-insensitively.
#[must_use]
pub fn error_lines(state: &FormState) -> Vec<String> {
    state
        .errors()
        .messages()
        .map(|message| format!("{ERROR_PREFIX}{message}"))
        .collect()
}

/// The labeled summary lines for an accepted submission.
///
/// Always three `label: value` lines for firstName, lastName, and email; a
/// fourth `Message:` line exists only when a message was captured.
#[must_use]
pub fn summary_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}", Field::FirstName.label(), snapshot.first_name),
        format!("{}: {}", Field::LastName.label(), snapshot.last_name),
        format!("{}: {}", Field::Email.label(), snapshot.email),
    ];
    if let Some(message) = &snapshot.message {
        lines.push(format!("{}: {}", Field::Message.label(), message));
    }
    lines
}
