mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from signup for tests
pub use signup::core::{
    CancelToken, Completion, Field, FieldChange, Finished, FormData, FormPhase, PendingSubmission,
    SignupForm, SubmissionId, SubmitOutcome, ValidationErrors,
};
pub use signup::{AllowedStartDates, CourseCatalog, SignupConfig};
