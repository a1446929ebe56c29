//! File discovery for finding skins on disk.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;

/// Discovers skin files in directories.
pub struct FileDiscovery {
    config: InputConfig,
}

/// Outcome of a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct Discovered {
    /// Files with a supported extension
    pub files: Vec<PathBuf>,
    /// Files that were found but ignored
    pub skipped: Vec<PathBuf>,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Discover all supported skin files at a path.
    ///
    /// If path is a file, returns it if supported.
    /// If path is a directory, lists it (recursively if configured).
    pub fn discover(&self, path: &Path) -> Discovered {
        let mut discovered = Discovered::default();

        if path.is_file() {
            self.classify(path.to_path_buf(), &mut discovered);
            return discovered;
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(path)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() {
                self.classify(entry.into_path(), &mut discovered);
            }
        }

        // The assembler reorders by name; this keeps listings reproducible
        discovered.files.sort();
        discovered.skipped.sort();
        discovered
    }

    fn classify(&self, path: PathBuf, discovered: &mut Discovered) {
        if self.is_supported(&path) {
            discovered.files.push(path);
        } else {
            tracing::debug!("Ignoring unsupported file {:?}", path);
            discovered.skipped.push(path);
        }
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
