//! Walks a contact form through a rejected and an accepted submission,
//! printing what a presentation layer would render at each step.
//!
//! Run with: `cargo run -p formwork-contact --example contact_flow`

use formwork_contact::prelude::*;

fn print_form(form: &FormState) {
    println!("== {}", view::HEADER);
    for field in Field::ALL {
        println!("   {}: [{}]", field.label(), form.value(field));
    }
    for line in view::error_lines(form) {
        println!("   {line}");
    }
    println!("   [{}]", view::SUBMIT_LABEL);
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut form = FormState::new();

    // A first attempt with a short first name and a malformed email.
    form.set_field(Field::FirstName, "Max");
    form.set_field(Field::Email, "aaaaa@aaaaa");
    print_form(&form);

    match form.submit() {
        SubmitOutcome::Rejected(errors) => println!("rejected:\n{errors}"),
        SubmitOutcome::Accepted(_) => unreachable!("the form is not valid yet"),
    }

    // Fix everything and resubmit.
    form.set_field(Field::FirstName, "Theresa");
    form.set_field(Field::LastName, "Underwood");
    form.set_field(Field::Email, "mu@aol.com");
    form.set_field(Field::Message, "Looking forward to hearing back.");
    print_form(&form);

    match form.submit() {
        SubmitOutcome::Accepted(snapshot) => {
            println!("accepted:");
            for line in view::summary_lines(&snapshot) {
                println!("   {line}");
            }
        }
        SubmitOutcome::Rejected(errors) => unreachable!("unexpected rejection: {errors}"),
    }
}
