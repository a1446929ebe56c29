//! Error types for the skin document pipeline.
//!
//! Pipeline errors name the file that failed so a batch abort can be traced
//! back to a single input.

use thiserror::Error;

/// Top-level error type for skinpack operations.
#[derive(Error, Debug)]
pub enum SkinpackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Raw bytes of an input could not be read
    #[error("Read error for {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Texture id could not be computed
    #[error("Hash error for {name}: {source}")]
    Hash {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not a decodable image
    #[error("Decode error for {name}: {message}")]
    Decode { name: String, message: String },

    /// The blocking pool used for pixel work was unavailable
    #[error("Pixel context unavailable for {name}: {message}")]
    ContextUnavailable { name: String, message: String },

    /// A data URI could not be produced
    #[error("Encode error for {name}: {message}")]
    Encode { name: String, message: String },

    /// No inputs were supplied
    #[error("No skins to process")]
    EmptyBatch,
}

/// Convenience type alias for skinpack results.
pub type Result<T> = std::result::Result<T, SkinpackError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
