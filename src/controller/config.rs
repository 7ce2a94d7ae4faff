//! Controller configuration

use crate::model::DEFAULT_FLAG_REASON;

/// Configuration for a [`MediaController`](super::MediaController) session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Reason recorded when a video is flagged without one
    pub default_flag_reason: String,

    /// Seed for random playback (None = seed from the OS)
    pub rng_seed: Option<u64>,
}

impl ControllerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
            rng_seed: None,
        }
    }

    /// Use a fixed seed so random playback is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Set the reason used by `flag` when the caller supplies none.
    /// A blank reason keeps the built-in default.
    pub fn with_default_flag_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if !reason.trim().is_empty() {
            self.default_flag_reason = reason;
        }
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
