use std::time::Duration;

use crate::core::submission::SUBMIT_DELAY;

/// Runtime knobs for a signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupConfig {
    /// Simulated server latency between a valid submit and the success dialog.
    pub submit_delay: Duration,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            submit_delay: SUBMIT_DELAY,
        }
    }
}

impl SignupConfig {
    pub fn with_submit_delay_ms(mut self, millis: u64) -> Self {
        self.submit_delay = Duration::from_millis(millis);
        self
    }
}
