use super::cpcv::CpcvConfig;
use super::rolling::RollingConfig;
use super::traits::ConfigSection;
use crate::error::CvGuardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub cpcv: CpcvConfig,
    pub rolling: RollingConfig,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            cpcv: CpcvConfig::default(),
            rolling: RollingConfig::default(),
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<(), CvGuardError> {
        self.cpcv.validate()?;
        self.rolling.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<SplitConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(SplitConfig::default())),
        }
    }

    /// Load a TOML or JSON config file, dispatching on extension.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CvGuardError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CvGuardError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: SplitConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .map_err(|e| CvGuardError::Configuration(format!("Failed to parse config: {}", e)))?,
            _ => toml::from_str(&contents)
                .map_err(|e| CvGuardError::Configuration(format!("Failed to parse config: {}", e)))?,
        };

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CvGuardError> {
        let path = path.as_ref();
        let config = self.config.read().unwrap();

        let serialized = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::to_string_pretty(&*config)?,
            _ => toml::to_string_pretty(&*config)
                .map_err(|e| CvGuardError::Configuration(format!("Failed to serialize: {}", e)))?,
        };

        std::fs::write(path, serialized)
            .map_err(|e| CvGuardError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> SplitConfig {
        self.config.read().unwrap().clone()
    }

    pub fn set(&self, config: SplitConfig) -> Result<(), CvGuardError> {
        config.validate()?;
        *self.config.write().unwrap() = config;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
