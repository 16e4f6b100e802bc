//! Document state and whole-file text I/O.
//!
//! The text itself lives in the editing surface. A `Document` only tracks
//! which file, if any, the surface's text belongs to.

use std::path::{Path, PathBuf};

use crate::FileError;

/// Name shown in the title bar for untitled documents.
pub const APP_NAME: &str = "Quill";

/// The file association of the open document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Current file path (None for untitled documents)
    path: Option<PathBuf>,
}

impl Document {
    /// Creates an untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    /// Associates the document with `path`.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Forgets the current path.
    pub fn clear(&mut self) {
        self.path = None;
    }

    /// Window title. Mirrors the current path when one is set.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => APP_NAME.to_string(),
        }
    }
}

/// Reads a whole file as text.
///
/// Invalid UTF-8 is replaced rather than rejected so any file can be opened.
pub fn read_text(path: &Path) -> Result<String, FileError> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Writes `text` to `path`, replacing any existing contents.
pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    std::fs::write(path, text).map_err(|source| FileError::Save {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_title_mirrors_path() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), APP_NAME);
        assert!(doc.is_untitled());

        doc.set_path("/tmp/notes.txt");
        assert_eq!(doc.title(), "/tmp/notes.txt");

        doc.clear();
        assert_eq!(doc.title(), APP_NAME);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, FileError::Open { .. }));
        assert!(err.to_string().starts_with("Cannot open file: "));
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_text(dir.path(), "text").unwrap_err();
        assert!(matches!(err, FileError::Save { .. }));
        assert_eq!(err.path(), dir.path());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9").unwrap();

        assert_eq!(read_text(&path).unwrap(), "caf\u{FFFD}");
    }

    proptest! {
        #[test]
        fn prop_write_then_read_preserves_text(text in "\\PC*(\n\\PC*){0,4}") {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("doc.txt");

            write_text(&path, &text).unwrap();
            prop_assert_eq!(read_text(&path).unwrap(), text);
        }
    }
}
