//! skinpack core - builds the launcher's custom skin document.
//!
//! Takes a batch of Minecraft skin textures and produces the JSON document the
//! launcher reads from `launcher_custom_skins.json`.
//!
//! # Architecture
//!
//! A strictly sequential pipeline, one skin at a time:
//!
//! ```text
//! Sort → Read → Texture id → Decode → Classify → Head preview → Record
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use skinpack_core::{Config, SkinAssembler, SkinFile};
//!
//! #[tokio::main]
//! async fn main() -> skinpack_core::Result<()> {
//!     let config = Config::load()?;
//!     let assembler = SkinAssembler::new(&config);
//!
//!     let bytes = std::fs::read("steve.png")?;
//!     let document = assembler.assemble(vec![SkinFile::new("steve.png", bytes)]).await?;
//!     println!("{}", skinpack_core::output::to_json(&document, true)?);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PipelineResult, Result, SkinpackError};
pub use output::{DocumentWriter, DOCUMENT_FILE_NAME};
pub use pipeline::{
    AssemblyObserver, FileDiscovery, NoopObserver, PathSkin, SkinAssembler, SkinFile, SkinSource,
};
pub use types::{CustomSkins, SkinDocument, SkinRecord, SKIN_DOCUMENT_VERSION};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
