//! Plain-text sources for proposed titles and concepts.
//!
//! Extraction never fails from the ranker's point of view: an unreadable
//! source produces an empty string, which scores zero similarity.

use std::path::{Path, PathBuf};

/// Something that yields UTF-8 text.
pub trait TextSource {
    /// The extracted text, or an empty string if extraction failed.
    fn extract_text(&self) -> String;
}

impl TextSource for str {
    fn extract_text(&self) -> String {
        self.to_string()
    }
}

impl TextSource for String {
    fn extract_text(&self) -> String {
        self.clone()
    }
}

/// A plain-text file on disk. Invalid UTF-8 is replaced, not rejected.
#[derive(Debug, Clone)]
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextFile {
    fn extract_text(&self) -> String {
        match std::fs::read(&self.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "text extraction failed");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_extract_themselves() {
        assert_eq!("abc".extract_text(), "abc");
        assert_eq!(String::from("xyz").extract_text(), "xyz");
    }

    #[test]
    fn reads_file_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concept.txt");
        std::fs::write(&path, "Remote sensing of crop health.\n").unwrap();
        let source = PlainTextFile::new(&path);
        assert_eq!(source.extract_text(), "Remote sensing of crop health.\n");
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [b'o', b'k', 0xFF]).unwrap();
        assert_eq!(PlainTextFile::new(&path).extract_text(), "ok\u{FFFD}");
    }

    #[test]
    fn missing_file_is_empty() {
        let source = PlainTextFile::new("/no/such/file.txt");
        assert_eq!(source.extract_text(), "");
    }
}
