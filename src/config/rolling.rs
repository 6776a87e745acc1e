use super::traits::ConfigSection;
use crate::error::CvGuardError;
use serde::{Deserialize, Serialize};

/// Parameters for the rolling-horizon splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingConfig {
    pub batch_unit: usize,  // train window width in positions
    pub horizon: usize,     // test window width in positions
    pub latest_first: bool, // walk backward from the newest data
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            batch_unit: 200,
            horizon: 5,
            latest_first: true,
        }
    }
}

impl ConfigSection for RollingConfig {
    fn section_name() -> &'static str {
        "rolling"
    }

    fn validate(&self) -> Result<(), CvGuardError> {
        if self.batch_unit == 0 {
            return Err(CvGuardError::Configuration(
                "batch_unit must be positive".to_string(),
            ));
        }
        if self.horizon == 0 {
            return Err(CvGuardError::Configuration(
                "horizon must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
