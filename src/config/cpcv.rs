use super::traits::ConfigSection;
use crate::error::CvGuardError;
use serde::{Deserialize, Serialize};

/// Parameters for combinatorial purged cross-validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpcvConfig {
    pub n_blocks: usize,      // total contiguous blocks the dataset is cut into
    pub n_test_blocks: usize, // blocks assigned to test per fold
    pub purge_window: usize,  // fallback purge width in positions (no barrier times)
    pub embargo_window: usize, // post-test cooldown in positions
}

impl Default for CpcvConfig {
    fn default() -> Self {
        Self {
            n_blocks: 10,
            n_test_blocks: 2,
            purge_window: 5,
            embargo_window: 3,
        }
    }
}

impl ConfigSection for CpcvConfig {
    fn section_name() -> &'static str {
        "cpcv"
    }

    fn validate(&self) -> Result<(), CvGuardError> {
        if self.n_blocks < 2 {
            return Err(CvGuardError::Configuration(format!(
                "n_blocks ({}) must be at least 2",
                self.n_blocks
            )));
        }
        if self.n_test_blocks == 0 || self.n_test_blocks >= self.n_blocks {
            return Err(CvGuardError::Configuration(format!(
                "n_test_blocks ({}) must satisfy 0 < n_test_blocks < n_blocks ({})",
                self.n_test_blocks, self.n_blocks
            )));
        }
        Ok(())
    }
}
