//! Form state: current values, per-field errors, and the submitted snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use formwork_validator::ValidationError;

use crate::field::Field;
use crate::rules;

/// The current value of every field. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FormValues {
    /// The current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrites the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Per-field validation failures, at most one per field.
///
/// Iteration follows the field display order, so rendering the entries in
/// sequence yields the stable firstName, lastName, email ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `error` for `field`, replacing any previous entry.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.entries.insert(field, error);
    }

    /// Removes the entry for `field`, if present.
    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.entries.remove(&field)
    }

    /// The error currently attached to `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.entries.get(&field)
    }

    /// Iterates the entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.entries.iter().map(|(field, error)| (*field, error))
    }

    /// The visible error messages, in display order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|error| error.message.as_ref())
    }

    /// The number of fields currently in error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field is in error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An immutable copy of the values accepted by a successful submission.
///
/// `message` is captured only when it was non-empty at submit time; a
/// summary rendered from this snapshot has no message line otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Snapshot {
    /// Copies the current values, eliding an empty message.
    #[must_use]
    pub fn capture(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: if values.message.is_empty() {
                None
            } else {
                Some(values.message.clone())
            },
        }
    }
}

/// The contact form state machine.
///
/// Owns the field values, the per-field error set, and the snapshot of the
/// last accepted submission. A presentation layer feeds input events in via
/// [`set_field`](Self::set_field) / [`set_field_by_key`](Self::set_field_by_key)
/// and [`submit`](Self::submit), and renders whatever this state exposes.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    submitted: Option<Snapshot>,
}

impl FormState {
    /// Creates a fresh form: all values empty, no errors, no snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `field` with the latest input and re-runs its change-time
    /// check.
    ///
    /// A failing check stores the field's error; a passing or absent check
    /// clears any stale entry (the field will be re-checked at submit).
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        match rules::change_error(field, self.values.get(field)) {
            Some(error) => self.errors.insert(field, error),
            None => {
                self.errors.remove(field);
            }
        }
        debug!(field = field.key(), errors = self.errors.len(), "field updated");
    }

    /// Updates a field addressed by its wire key.
    ///
    /// This is the entry point a generic input binding uses.
    pub fn set_field_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), crate::error::FormError> {
        let field = Field::from_key(key)?;
        self.set_field(field, value);
        Ok(())
    }

    /// The current value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// All current field values.
    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The error currently attached to `field`, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// The current error set.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The visible error messages, in display order.
    #[must_use]
    pub fn visible_errors(&self) -> Vec<&str> {
        self.errors.messages().collect()
    }

    /// The snapshot of the last accepted submission, if one happened.
    #[must_use]
    pub fn submitted(&self) -> Option<&Snapshot> {
        self.submitted.as_ref()
    }

    pub(crate) fn errors_mut(&mut self) -> &mut FieldErrors {
        &mut self.errors
    }

    pub(crate) fn store_snapshot(&mut self, snapshot: Snapshot) {
        self.submitted = Some(snapshot);
    }
}
