//! Texture id computation.
//!
//! The launcher identifies a texture by the SHA-256 of the *hex text* of the
//! file bytes, not of the bytes themselves. Existing documents depend on this
//! exact form, so `digest(hex(bytes))` is what every function here computes.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Computes launcher texture ids.
pub struct TextureHasher;

impl TextureHasher {
    /// Texture id of an in-memory byte buffer.
    pub fn texture_id(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(hex::encode(data).as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Texture id of a file on disk.
    ///
    /// Streams the file, hex-encoding each chunk into the digest, so the
    /// result equals [`TextureHasher::texture_id`] of the full contents.
    pub fn texture_id_from_path(path: &Path) -> PipelineResult<String> {
        let hash_error = |source| PipelineError::Hash {
            name: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(hash_error)?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();

        let mut buffer = [0u8; 65536];
        let mut hex_buffer = vec![0u8; buffer.len() * 2];
        loop {
            let bytes_read = reader.read(&mut buffer).map_err(hash_error)?;
            if bytes_read == 0 {
                break;
            }
            let hex_len = bytes_read * 2;
            hex::encode_to_slice(&buffer[..bytes_read], &mut hex_buffer[..hex_len])
                .map_err(|e| hash_error(std::io::Error::other(e)))?;
            hasher.update(&hex_buffer[..hex_len]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}
