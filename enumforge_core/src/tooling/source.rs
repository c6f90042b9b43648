use crate::error::{EnumforgeError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where scanned source text comes from.
pub trait Source {
    /// Reads the whole content. Reader-backed sources can only be read once.
    fn content(&mut self) -> Result<String>;

    /// Identifier used in diagnostics and to name the companion file.
    fn filename(&self) -> String;
}

/// A source file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    fn content(&mut self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            EnumforgeError::parse_source(&self.path, format!("failed to read source: {e}"))
        })
    }

    fn filename(&self) -> String {
        self.path.display().to_string()
    }
}

/// Source text from any reader, reported as `reader`.
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn content(&mut self) -> Result<String> {
        let mut buffer = String::new();
        self.reader
            .read_to_string(&mut buffer)
            .map_err(|e| EnumforgeError::parse_source("reader", format!("failed to read source: {e}")))?;
        Ok(buffer)
    }

    fn filename(&self) -> String {
        "reader".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_source() {
        let mut source = ReaderSource::new(Cursor::new("pub type A = u8;"));
        assert_eq!(source.filename(), "reader");
        assert_eq!(source.content().unwrap(), "pub type A = u8;");
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/definitely/not/here.rs");
        let err = source.content().unwrap_err();
        assert!(matches!(err, EnumforgeError::ParseSource { .. }));
    }

    #[test]
    fn test_file_source_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.rs");
        fs::write(&path, "pub type Color = &'static str;").unwrap();
        let mut source = FileSource::new(&path);
        assert!(source.content().unwrap().contains("Color"));
        assert!(source.filename().ends_with("colors.rs"));
    }
}
