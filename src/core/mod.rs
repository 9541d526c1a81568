pub mod date;
pub mod form;
pub mod submission;
pub mod validation;

pub use form::{Field, FieldChange, FormData, FormPhase, SignupForm, SubmitOutcome};
pub use submission::{CancelToken, Completion, Finished, PendingSubmission, SUBMIT_DELAY, SubmissionId};
pub use validation::{ValidationErrors, validate};
