pub mod catalog;
pub mod config;
pub mod core;
pub mod logging;

pub use catalog::{AllowedStartDates, Course, CourseCatalog};
pub use config::SignupConfig;
pub use crate::core::{
    CancelToken, Completion, Field, FieldChange, Finished, FormData, FormPhase, PendingSubmission,
    SignupForm, SubmissionId, SubmitOutcome, ValidationErrors,
};

#[cfg(feature = "gui")]
pub mod gui;
