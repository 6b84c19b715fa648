use serde::{Deserialize, Serialize};

pub const DEFAULT_PROGRESS_STEP: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum percentage gain between two progress reports
    pub progress_step: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}

impl EngineConfig {
    pub fn with_progress_step(step: u8) -> Self {
        Self {
            progress_step: step.clamp(1, 100),
        }
    }
}
