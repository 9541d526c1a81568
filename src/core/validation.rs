use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::AllowedStartDates;
use crate::core::date::calendar_day;
use crate::core::form::{Field, FormData};

pub const NOTE_MIN_CHARS: usize = 20;
pub const NOTE_MAX_CHARS: usize = 500;

pub const DATE_NOT_OFFERED: &str =
    "Your selected course and subject is not offered beginning from your selected date.";
pub const NOTE_LENGTH: &str =
    "Note must be more than 20 characters and less than 500 characters long.";

/// Per-field validation messages. A field present here is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub(crate) fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

fn required(field: Field) -> String {
    format!("{} is required.", field.label())
}

/// Check every field independently and collect all failures.
pub fn validate(data: &FormData, allowed: &AllowedStartDates) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if data.course.is_empty() {
        errors.insert(Field::Course, required(Field::Course));
    }

    if data.subject.is_empty() {
        errors.insert(Field::Subject, required(Field::Subject));
    }

    // Membership is only checked once a date is set.
    match data.startdate {
        None => errors.insert(Field::StartDate, required(Field::StartDate)),
        Some(date) if !allowed.allows(date) => {
            tracing::debug!(
                day = %calendar_day(date).unwrap_or_default(),
                "start date not offered"
            );
            errors.insert(Field::StartDate, DATE_NOT_OFFERED);
        }
        Some(_) => {}
    }

    if !data.note.is_empty() {
        // Counted in UTF-16 code units, the way browsers report input length.
        let len = data.note.encode_utf16().count();
        if !(NOTE_MIN_CHARS..=NOTE_MAX_CHARS).contains(&len) {
            errors.insert(Field::Note, NOTE_LENGTH);
        }
    }

    errors
}
