//! Integration tests for form validation.
//!
//! Tests cover:
//! - Required fields (course, subject, startdate)
//! - Start date membership in the allowed set
//! - Note length bounds
//! - Error map serialization

mod common;

use common::*;
use signup::core::validation::{DATE_NOT_OFFERED, NOTE_LENGTH};

#[test]
fn test_valid_registration_has_no_errors() {
    let mut form = make_valid_form();

    assert!(form.validate());
    assert!(form.errors().is_empty());
}

#[test]
fn test_empty_form_reports_required_fields() {
    let mut form = SignupForm::new();

    assert!(!form.validate());

    let errors = form.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::Course), Some("Course is required."));
    assert_eq!(errors.get(Field::Subject), Some("Subject is required."));
    assert_eq!(errors.get(Field::StartDate), Some("Startdate is required."));
    assert!(!errors.contains(Field::Note));
}

#[test]
fn test_each_missing_required_field_fails_alone() {
    let cases = [
        ("", "Short Reports", Some(OFFERED_DATE), Field::Course),
        ("technical", "", Some(OFFERED_DATE), Field::Subject),
        ("technical", "Short Reports", None, Field::StartDate),
    ];

    for (course, subject, startdate, missing) in cases {
        let mut form = SignupForm::new();
        fill(&mut form, course, subject, startdate, "");

        assert!(!form.validate(), "{} missing should fail", missing);
        let fields: Vec<Field> = form.errors().fields().collect();
        assert_eq!(fields, vec![missing]);
    }
}

#[test]
fn test_date_not_offered_and_short_note() {
    let mut form = SignupForm::new();
    fill(&mut form, "english", "Poetry", Some(NOT_OFFERED_DATE), "short");

    assert!(!form.validate());

    let errors = form.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::StartDate), Some(DATE_NOT_OFFERED));
    assert_eq!(errors.get(Field::Note), Some(NOTE_LENGTH));
}

#[test]
fn test_missing_date_only_reports_required() {
    let mut form = SignupForm::new();
    fill(&mut form, "english", "Poetry", None, "");

    assert!(!form.validate());
    assert_eq!(
        form.errors().get(Field::StartDate),
        Some("Startdate is required.")
    );
}

#[test]
fn test_every_allowed_date_passes() -> anyhow::Result<()> {
    for date in AllowedStartDates::default().dates()? {
        let mut form = SignupForm::new();
        fill(&mut form, "computer", "Web Development", Some(date), "");

        assert!(form.validate(), "{} should be offered", date);
    }
    Ok(())
}

#[test]
fn test_note_length_bounds() {
    // (length, expect note error)
    let cases = [
        (1, true),
        (19, true),
        (20, false),
        (21, false),
        (500, false),
        (501, true),
    ];

    for (len, expect_error) in cases {
        let mut form = make_valid_form();
        form.set_field(FieldChange::Note(note_of_len(len)));

        let valid = form.validate();
        assert_eq!(valid, !expect_error, "note of {} characters", len);
        assert_eq!(
            form.errors().contains(Field::Note),
            expect_error,
            "note of {} characters",
            len
        );
    }
}

#[test]
fn test_note_length_counts_utf16_units() {
    // Each emoji is a surrogate pair, so it counts as two units.
    let cases = [
        ("😀".repeat(9) + "n", true),
        ("😀".repeat(10), false),
        ("😀".repeat(250), false),
        ("😀".repeat(250) + "n", true),
    ];

    for (note, expect_error) in cases {
        let mut form = make_valid_form();
        let units = note.encode_utf16().count();
        form.set_field(FieldChange::Note(note));

        assert_eq!(form.validate(), !expect_error, "note of {} units", units);
        assert_eq!(
            form.errors().contains(Field::Note),
            expect_error,
            "note of {} units",
            units
        );
    }
}

#[test]
fn test_two_byte_characters_count_once() {
    let mut form = make_valid_form();
    // 20 units, 40 bytes
    form.set_field(FieldChange::Note("é".repeat(20)));

    assert!(form.validate());
}

#[test]
fn test_validation_replaces_previous_errors() {
    let mut form = SignupForm::new();
    assert!(!form.validate());
    assert_eq!(form.errors().len(), 3);

    fill(&mut form, "technical", "Presentations", Some(NOT_OFFERED_DATE), "");
    assert!(!form.validate());

    let fields: Vec<Field> = form.errors().fields().collect();
    assert_eq!(fields, vec![Field::StartDate]);
}

#[test]
fn test_errors_serialize_by_field_name() -> anyhow::Result<()> {
    let mut form = SignupForm::new();
    form.validate();

    let json = serde_json::to_value(form.errors())?;
    assert_eq!(
        json,
        serde_json::json!({
            "course": "Course is required.",
            "subject": "Subject is required.",
            "startdate": "Startdate is required.",
        })
    );
    Ok(())
}
