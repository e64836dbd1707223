//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing keys fall back to the production defaults, so a minimal
    /// file only needs the values it wants to change:
    ///
    /// ```yaml
    /// utc_offset_minutes: 360
    /// grace_minutes: 10
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist
    /// and [`EngineError::ConfigParseError`] for invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/engine.yaml")?;
    /// # Ok::<(), shift_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
