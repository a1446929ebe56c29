//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.input.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "input.supported_formats must not be empty".into(),
            ));
        }
        if self.timestamps.step_ms == 0 {
            return Err(ConfigError::ValidationError(
                "timestamps.step_ms must be > 0".into(),
            ));
        }
        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.file_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
