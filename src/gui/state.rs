use crate::{SignupConfig, core::SignupForm};

#[derive(Debug)]
pub struct AppState {
    pub form: SignupForm,
}

impl AppState {
    pub fn new(config: SignupConfig) -> Self {
        Self {
            form: SignupForm::with_config(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SignupConfig::default())
    }
}
