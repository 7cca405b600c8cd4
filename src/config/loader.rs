//! Settings loading functionality.
//!
//! This module loads [`PayrollSettings`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollSettings;

impl PayrollSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g. "./config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings on success, or an error if:
    /// - The file is missing (`SettingsNotFound`)
    /// - The file contains invalid YAML (`SettingsParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::PayrollSettings;
    ///
    /// let settings = PayrollSettings::from_file("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
