//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ModelError, ModelResult};

use super::types::{AppConfig, LeavePolicy, ReportConfig};

/// Loads and provides access to the application configuration.
///
/// The file layout mirrors [`AppConfig`]:
///
/// ```text
/// leave_policy:
///   paid_leave_days: 15
///   casual_leave_days: 15
/// report:
///   width: 80
///   color: true
/// ```
///
/// Missing sections and fields fall back to their defaults.
///
/// # Example
///
/// ```
/// use employee_model::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("leave_policy:\n  paid_leave_days: 20\n")?;
/// assert_eq!(loader.leave_policy().paid_leave_days, 20);
/// assert_eq!(loader.leave_policy().casual_leave_days, 15);
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ModelError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Parses configuration from an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> ModelResult<Self> {
        let config = Self::parse(content, "<inline>")?;
        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> ModelResult<AppConfig> {
        // An empty document deserializes to unit, not to a struct.
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| ModelError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        &self.config.leave_policy
    }

    /// Returns the reporter settings.
    pub fn report(&self) -> &ReportConfig {
        &self.config.report
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
