//! Output writing for the generated skin document.

use std::io::{self, Write};
use std::path::Path;

use crate::types::SkinDocument;

/// File name the launcher looks for.
pub const DOCUMENT_FILE_NAME: &str = "launcher_custom_skins.json";

/// A writer that serializes a [`SkinDocument`] as JSON.
pub struct DocumentWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> DocumentWriter<W> {
    /// Create a new document writer.
    ///
    /// # Arguments
    ///
    /// * `writer` - The underlying writer (file, stdout, etc.)
    /// * `pretty` - Whether to indent with two spaces
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Write the document followed by a newline.
    pub fn write(&mut self, document: &SkinDocument) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, document).map_err(io::Error::other)?;
        } else {
            serde_json::to_writer(&mut self.writer, document).map_err(io::Error::other)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Convenience function to serialize a document to a JSON string.
pub fn to_json(document: &SkinDocument, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
}

/// Write a document to `path`, creating parent directories as needed.
pub fn write_document(path: &Path, document: &SkinDocument, pretty: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    let mut writer = DocumentWriter::new(io::BufWriter::new(file), pretty);
    writer.write(document)?;
    writer.flush()?;
    tracing::debug!("Wrote {} skin(s) to {:?}", document.custom_skins.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomSkins, SkinRecord};

    fn document() -> SkinDocument {
        let mut skins = CustomSkins::new();
        skins
            .insert(SkinRecord {
                created: "2024-05-01T12:00:00.000Z".to_string(),
                updated: "2024-05-01T12:00:00.000Z".to_string(),
                id: "skin_1".to_string(),
                name: "steve".to_string(),
                skin_image: "data:image/png;base64,AA==".to_string(),
                model_image: "data:image/png;base64,AA==".to_string(),
                slim: false,
                texture_id: "ab".repeat(32),
            })
            .unwrap();
        SkinDocument::new(skins)
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let mut buffer = Vec::new();
        let mut writer = DocumentWriter::new(&mut buffer, true);
        writer.write(&document()).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("{\n  \"customSkins\": {\n    \"skin_1\": {"));
        assert!(output.ends_with("\n  \"version\": 1\n}\n"));
    }

    #[test]
    fn test_compact_is_single_line() {
        let output = to_json(&document(), false).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"textureId\""));
    }

    #[test]
    fn test_write_document_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DOCUMENT_FILE_NAME);
        write_document(&path, &document(), true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: SkinDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(back, document());
    }
}
