//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Input discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions accepted as skins (matched case-insensitively)
    pub supported_formats: Vec<String>,

    /// Descend into subdirectories when the input is a directory
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec!["png".to_string()],
            recursive: false,
        }
    }
}

/// Record timestamp settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Milliseconds subtracted from the anchor after each record
    pub step_ms: u64,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self { step_ms: 1 }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the document is written to (supports `~`)
    pub directory: String,

    /// Name of the generated document
    pub file_name: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_name: crate::output::DOCUMENT_FILE_NAME.to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
