//! Per-field validation rules with their user-facing message text.
//!
//! Two policies apply:
//!
//! - **Change-time** checks run on every keystroke of the bound field:
//!   firstName's length rule fires as the user types, and email's format
//!   rule fires once something has been typed (an emptied email box carries
//!   no format error).
//! - **Submit-time** checks run for every required field when the user
//!   submits: firstName length, lastName presence, email format (an empty
//!   email fails the format rule here).

use formwork_validator::prelude::*;

use crate::field::Field;

pub(crate) const FIRST_NAME_MESSAGE: &str = "firstName must have at least 5 characters";
pub(crate) const LAST_NAME_MESSAGE: &str = "lastName is a required field";
pub(crate) const EMAIL_MESSAGE: &str = "email must be a valid email address";

const FIRST_NAME_MIN: usize = 5;

fn first_name() -> WithMessage<MinLength> {
    min_length(FIRST_NAME_MIN).with_message(FIRST_NAME_MESSAGE)
}

fn last_name() -> WithMessage<NotEmpty> {
    not_empty().with_message(LAST_NAME_MESSAGE)
}

fn email_address() -> WithMessage<Email> {
    email().with_message(EMAIL_MESSAGE)
}

/// The failure produced by `field`'s change-time check, if any.
///
/// Fields without a change-time rule (lastName, message) always return
/// `None`, which the state layer treats as "clear any stale entry".
pub(crate) fn change_error(field: Field, value: &str) -> Option<ValidationError> {
    let error = match field {
        Field::FirstName => first_name().validate(value).err(),
        Field::Email => email_address()
            .when(|s: &str| !s.is_empty())
            .validate(value)
            .err(),
        Field::LastName | Field::Message => None,
    };
    error.map(|e| e.with_field(field.key()))
}

/// The failure produced by `field`'s submit-time check, if any.
pub(crate) fn submit_error(field: Field, value: &str) -> Option<ValidationError> {
    let error = match field {
        Field::FirstName => first_name().validate(value).err(),
        Field::LastName => last_name().validate(value).err(),
        Field::Email => email_address().validate(value).err(),
        Field::Message => None,
    };
    error.map(|e| e.with_field(field.key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_change_check_fires_while_typing() {
        let error = change_error(Field::FirstName, "Max").unwrap();
        assert_eq!(error.message, FIRST_NAME_MESSAGE);
        assert_eq!(error.field.as_deref(), Some("firstName"));

        assert!(change_error(Field::FirstName, "Derek").is_none());
    }

    #[test]
    fn empty_first_name_fails_the_length_rule() {
        let change = change_error(Field::FirstName, "").unwrap();
        let submit = submit_error(Field::FirstName, "").unwrap();
        assert_eq!(change.message, submit.message);
        assert_eq!(submit.message, FIRST_NAME_MESSAGE);
    }

    #[test]
    fn email_change_check_skips_empty_input() {
        assert!(change_error(Field::Email, "").is_none());
        assert!(change_error(Field::Email, "aaaaa@aaaaa").is_some());
        assert!(change_error(Field::Email, "mu@aol.com").is_none());
    }

    #[test]
    fn email_submit_check_fails_empty_input() {
        let error = submit_error(Field::Email, "").unwrap();
        assert_eq!(error.message, EMAIL_MESSAGE);
    }

    #[test]
    fn last_name_only_checked_at_submit() {
        assert!(change_error(Field::LastName, "").is_none());
        let error = submit_error(Field::LastName, "").unwrap();
        assert_eq!(error.message, LAST_NAME_MESSAGE);
        assert!(submit_error(Field::LastName, "Smith").is_none());
    }

    #[test]
    fn message_is_never_checked() {
        assert!(change_error(Field::Message, "").is_none());
        assert!(submit_error(Field::Message, "").is_none());
        assert!(submit_error(Field::Message, "hello there").is_none());
    }
}
