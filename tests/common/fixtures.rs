#![allow(dead_code)]

use signup::core::{FieldChange, PendingSubmission, SignupForm, SubmitOutcome};
use time::{Date, macros::date};

/// An allowed start date ("Fri Dec 20 2019").
pub const OFFERED_DATE: Date = date!(2019-12-20);

/// A date that is not in the allowed set.
pub const NOT_OFFERED_DATE: Date = date!(2020-01-01);

/// Creates a form filled with a registration that passes validation.
pub fn make_valid_form() -> SignupForm {
    let mut form = SignupForm::new();
    fill(&mut form, "technical", "Short Reports", Some(OFFERED_DATE), "");
    form
}

/// Sets every field on the form through the regular change handlers.
pub fn fill(
    form: &mut SignupForm,
    course: &str,
    subject: &str,
    startdate: Option<Date>,
    note: &str,
) {
    form.set_field(FieldChange::Course(course.to_string()));
    form.set_field(FieldChange::Subject(subject.to_string()));
    form.set_field(FieldChange::StartDate(startdate));
    form.set_field(FieldChange::Note(note.to_string()));
}

/// A note of exactly `len` characters.
pub fn note_of_len(len: usize) -> String {
    "n".repeat(len)
}

/// Submits the form and returns the pending submission, failing if it did not start.
pub fn start_submission(form: &mut SignupForm) -> anyhow::Result<PendingSubmission> {
    match form.submit() {
        SubmitOutcome::Started(pending) => Ok(pending),
        other => anyhow::bail!("Expected submission to start, got {:?}", other),
    }
}
