//! The submission transition: validate every required field, then either
//! commit a snapshot or publish the full failing set.

use tracing::debug;

use formwork_validator::ValidationErrors;

use crate::field::Field;
use crate::rules;
use crate::state::{FormState, Snapshot};

/// The result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every required field passed; the snapshot was stored and is echoed
    /// here for immediate display.
    Accepted(Snapshot),
    /// At least one required field failed. Carries every failure at once;
    /// the same errors are attached to the form state, replacing the
    /// previous set.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    /// Whether the submission was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

impl FormState {
    /// Attempts to submit the form with its current values.
    ///
    /// Re-validates firstName, lastName, and email from scratch. On success
    /// the required fields' error entries are cleared and a [`Snapshot`] is
    /// captured (replacing any earlier one); on failure every failing field
    /// gets its error entry set and the snapshot is left untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut failures = ValidationErrors::new();

        for field in Field::REQUIRED {
            self.errors_mut().remove(field);
            if let Some(error) = rules::submit_error(field, self.value(field)) {
                failures.add(error.clone());
                self.errors_mut().insert(field, error);
            }
        }

        if failures.has_errors() {
            debug!(errors = failures.len(), "submission rejected");
            return SubmitOutcome::Rejected(failures);
        }

        let snapshot = Snapshot::capture(self.values());
        debug!(
            message_included = snapshot.message.is_some(),
            "submission accepted"
        );
        self.store_snapshot(snapshot.clone());
        SubmitOutcome::Accepted(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.set_field(Field::FirstName, "Theresa");
        form.set_field(Field::LastName, "Underwood");
        form.set_field(Field::Email, "mu@aol.com");
        form
    }

    #[test]
    fn empty_submit_reports_all_three_required_fields() {
        let mut form = FormState::new();
        let outcome = form.submit();

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(form.visible_errors().len(), 3);
        assert!(form.submitted().is_none());
    }

    #[test]
    fn missing_email_is_the_only_failure() {
        let mut form = FormState::new();
        form.set_field(Field::FirstName, "Derek");
        form.set_field(Field::LastName, "Smith");

        let SubmitOutcome::Rejected(errors) = form.submit() else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.errors()[0].message,
            "email must be a valid email address"
        );
    }

    #[test]
    fn accepted_submit_stores_and_returns_the_snapshot() {
        let mut form = filled_form();
        let outcome = form.submit();

        let SubmitOutcome::Accepted(snapshot) = outcome else {
            panic!("expected acceptance");
        };
        assert_eq!(snapshot.first_name, "Theresa");
        assert_eq!(snapshot.message, None);
        assert_eq!(form.submitted(), Some(&snapshot));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn accepted_submit_includes_non_empty_message() {
        let mut form = filled_form();
        form.set_field(Field::Message, "hello from the tests");

        let SubmitOutcome::Accepted(snapshot) = form.submit() else {
            panic!("expected acceptance");
        };
        assert_eq!(snapshot.message.as_deref(), Some("hello from the tests"));
    }

    #[test]
    fn rejected_submit_keeps_an_earlier_snapshot() {
        let mut form = filled_form();
        assert!(form.submit().is_accepted());
        let first = form.submitted().cloned().unwrap();

        form.set_field(Field::Email, "");
        assert!(!form.submit().is_accepted());
        assert_eq!(form.submitted(), Some(&first));
    }

    #[test]
    fn repeated_invalid_submits_replace_the_error_set() {
        let mut form = FormState::new();
        form.submit();
        form.submit();
        form.submit();
        assert_eq!(form.visible_errors().len(), 3);
    }

    #[test]
    fn repeated_valid_submits_republish_an_equal_snapshot() {
        let mut form = filled_form();
        let SubmitOutcome::Accepted(first) = form.submit() else {
            panic!("expected acceptance");
        };
        let SubmitOutcome::Accepted(second) = form.submit() else {
            panic!("expected acceptance");
        };
        assert_eq!(first, second);
        assert_eq!(form.submitted(), Some(&second));
    }

    #[test]
    fn submit_clears_stale_change_time_errors_once_fixed() {
        let mut form = filled_form();
        form.set_field(Field::FirstName, "Max");
        assert_eq!(form.visible_errors().len(), 1);

        form.set_field(Field::FirstName, "Maxim");
        assert!(form.submit().is_accepted());
        assert!(form.errors().is_empty());
    }
}
