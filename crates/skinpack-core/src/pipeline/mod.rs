//! Skin processing pipeline components.
//!
//! Stages, in the order the assembler runs them for each skin:
//! - **source**: Named inputs and their canonical ordering
//! - **hash**: Texture ids (SHA-256 over the hex text of the bytes)
//! - **decode**: Decode bytes into an RGBA pixel grid
//! - **classify**: Slim vs. classic arm detection
//! - **preview**: 128x128 head preview
//! - **data_uri**: Base64 data URIs for embedded images
//! - **timestamp**: Strictly decreasing record timestamps
//! - **assembler**: Orchestrates the full pipeline
//!
//! **discovery** sits outside the pipeline and finds skin files on disk.

pub mod assembler;
pub mod classify;
pub mod data_uri;
pub mod decode;
pub mod discovery;
pub mod hash;
pub mod preview;
pub mod source;
pub mod timestamp;

// Re-exports for convenient access
pub use assembler::{AssemblyObserver, NoopObserver, SkinAssembler};
pub use classify::{is_slim, SkinModel, SLIM_PROBES};
pub use decode::{DecodedSkin, SkinDecoder};
pub use discovery::{Discovered, FileDiscovery};
pub use hash::TextureHasher;
pub use preview::{render_head, PREVIEW_SIZE};
pub use source::{PathSkin, SkinFile, SkinSource};
pub use timestamp::TimestampClock;
