use std::fmt;

use serde::Serialize;
use time::Date;

use crate::{
    catalog::{AllowedStartDates, Course, CourseCatalog},
    config::SignupConfig,
    core::{
        submission::{CancelToken, Completion, Finished, PendingSubmission, SubmissionId},
        validation::{ValidationErrors, validate},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Course,
    Subject,
    StartDate,
    Note,
}

impl Field {
    /// Field key as it appears in error maps.
    pub fn name(self) -> &'static str {
        match self {
            Field::Course => "course",
            Field::Subject => "subject",
            Field::StartDate => "startdate",
            Field::Note => "note",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Course => "Course",
            Field::Subject => "Subject",
            Field::StartDate => "Startdate",
            Field::Note => "Note",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The values the user has entered so far. Empty strings mean unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub course: String,
    pub subject: String,
    pub startdate: Option<Date>,
    pub note: String,
}

/// A single input change coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Course(String),
    Subject(String),
    StartDate(Option<Date>),
    Note(String),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Course(_) => Field::Course,
            FieldChange::Subject(_) => Field::Subject,
            FieldChange::StartDate(_) => Field::StartDate,
            FieldChange::Note(_) => Field::Note,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the form.
    Invalid,
    /// A submission is already in flight.
    AlreadySubmitting,
    Started(PendingSubmission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Completed,
}

/// Owns the form data, validation errors and submission/dialog flags.
#[derive(Debug)]
pub struct SignupForm {
    catalog: CourseCatalog,
    allowed_dates: AllowedStartDates,
    config: SignupConfig,
    data: FormData,
    errors: ValidationErrors,
    submitting: bool,
    success_dialog_open: bool,
    next_id: u64,
    pending: Option<(SubmissionId, CancelToken)>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::with_config(SignupConfig::default())
    }

    pub fn with_config(config: SignupConfig) -> Self {
        Self {
            catalog: CourseCatalog::default(),
            allowed_dates: AllowedStartDates::default(),
            config,
            data: FormData::default(),
            errors: ValidationErrors::default(),
            submitting: false,
            success_dialog_open: false,
            next_id: 0,
            pending: None,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success_dialog_open(&self) -> bool {
        self.success_dialog_open
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn allowed_dates(&self) -> &AllowedStartDates {
        &self.allowed_dates
    }

    pub fn config(&self) -> &SignupConfig {
        &self.config
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        self.catalog.get(&self.data.course)
    }

    /// Subjects offered by the selected course, empty when none is selected.
    pub fn subjects(&self) -> &'static [&'static str] {
        self.selected_course()
            .map(|course| course.subjects)
            .unwrap_or(&[])
    }

    pub fn phase(&self) -> FormPhase {
        if self.success_dialog_open {
            FormPhase::Completed
        } else if self.submitting {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }

    /// Replace one field and drop its validation error.
    pub fn set_field(&mut self, change: FieldChange) {
        let field = change.field();
        tracing::debug!(%field, "field changed");
        match change {
            FieldChange::Course(course) => {
                if course != self.data.course {
                    // A subject from another course would otherwise survive the switch.
                    let keeps_subject = self
                        .catalog
                        .get(&course)
                        .is_some_and(|c| c.offers(&self.data.subject));
                    if !keeps_subject && !self.data.subject.is_empty() {
                        tracing::debug!(subject = %self.data.subject, "clearing stale subject");
                        self.data.subject.clear();
                    }
                }
                self.data.course = course;
            }
            FieldChange::Subject(subject) => self.data.subject = subject,
            FieldChange::StartDate(date) => self.data.startdate = date,
            FieldChange::Note(note) => self.data.note = note,
        }
        self.errors.remove(field);
    }

    pub fn set_start_date(&mut self, date: Date) {
        self.set_field(FieldChange::StartDate(Some(date)));
    }

    /// Recompute all errors. Returns true when every field is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.data, &self.allowed_dates);
        if !self.errors.is_empty() {
            tracing::debug!(
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "validation failed"
            );
        }
        self.errors.is_empty()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            tracing::warn!("submit ignored while a submission is in flight");
            return SubmitOutcome::AlreadySubmitting;
        }
        if !self.validate() {
            return SubmitOutcome::Invalid;
        }
        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        let token = CancelToken::new();
        self.pending = Some((id, token.clone()));
        self.submitting = true;
        tracing::info!(
            id = id.0,
            course = %self.data.course,
            subject = %self.data.subject,
            delay = ?self.config.submit_delay,
            "submission started"
        );
        SubmitOutcome::Started(PendingSubmission::new(id, token, self.config.submit_delay))
    }

    /// Route the result of a pending submission back into the form.
    ///
    /// Only the submission currently in flight is applied. Results from a
    /// cancelled or superseded submission are dropped.
    pub fn finish_submission(&mut self, finished: Finished) {
        let in_flight = self.pending.as_ref().map(|(id, _)| *id);
        if in_flight != Some(finished.id) {
            tracing::debug!(
                id = finished.id.0,
                completion = ?finished.completion,
                "stale completion ignored"
            );
            return;
        }
        match finished.completion {
            Completion::Elapsed => self.complete_submission(),
            Completion::Cancelled => {
                self.pending = None;
                self.submitting = false;
            }
        }
    }

    pub fn complete_submission(&mut self) {
        tracing::info!("submission completed");
        self.pending = None;
        self.submitting = false;
        self.success_dialog_open = true;
        self.reset();
    }

    pub fn cancel_submission(&mut self) {
        if let Some((id, token)) = self.pending.take() {
            tracing::info!(id = id.0, "submission cancelled");
            token.cancel();
        }
        self.submitting = false;
    }

    /// Dismiss the dialog without touching data or errors.
    pub fn close_dialog(&mut self) {
        self.success_dialog_open = false;
    }

    /// The "Ok" path: close the dialog and start over with an empty form.
    pub fn acknowledge(&mut self) {
        self.success_dialog_open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.errors.clear();
        self.data = FormData::default();
    }
}

impl Drop for SignupForm {
    fn drop(&mut self) {
        if let Some((_, token)) = self.pending.take() {
            token.cancel();
        }
    }
}
