//! Skin inputs and their canonical ordering.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A named skin whose bytes are fetched asynchronously.
#[async_trait]
pub trait SkinSource: Send + Sync {
    /// File name including extension (no directory components).
    fn name(&self) -> &str;

    /// Read the raw file bytes.
    async fn read(&self) -> std::io::Result<Vec<u8>>;
}

#[async_trait]
impl<S: SkinSource + ?Sized> SkinSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        (**self).read().await
    }
}

/// A skin already held in memory.
#[derive(Debug, Clone)]
pub struct SkinFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SkinFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[async_trait]
impl SkinSource for SkinFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// A skin on disk, read lazily when the pipeline reaches it.
#[derive(Debug, Clone)]
pub struct PathSkin {
    path: PathBuf,
    name: String,
}

impl PathSkin {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SkinSource for PathSkin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// Sort sources by uppercased name, ascending.
///
/// The sort is stable: names that fold to the same key keep their input order.
/// This order fixes both the `skin_<n>` ids and the timestamp sequence.
pub fn sort_sources<S: SkinSource>(sources: &mut [S]) {
    sources.sort_by_cached_key(|s| s.name().to_uppercase());
}

/// Display name of a skin: everything before the first `.`.
///
/// `alex.slim.png` becomes `alex`; a name without a dot is returned whole.
pub fn skin_name(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map_or(file_name, |(stem, _)| stem)
}
