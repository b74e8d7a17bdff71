//! JSON file storage backend.
//!
//! The library is stored as a single pretty-printed JSON array of book
//! objects. Writes go through `fs::write_atomic` so a failed save never
//! leaves a truncated file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use super::ensure_unique_titles;
use super::traits::BookStore;
use super::types::Book;
use crate::error::{Result, ShelfError};

/// Indentation used when writing the library file.
const INDENT: &[u8] = b"    ";

/// File-backed book store rooted at an injected path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(books: &[Book]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "library file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(ShelfError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let books: Vec<Book> = serde_json::from_str(&contents).map_err(|err| {
            ShelfError::Storage(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                err
            ))
        })?;
        ensure_unique_titles(&books)?;

        debug!(path = %self.path.display(), count = books.len(), "loaded library");
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let data = Self::encode(books)?;
        crate::fs::write_atomic(&self.path, &data).map_err(|err| {
            ShelfError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })?;
        debug!(path = %self.path.display(), count = books.len(), "saved library");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NewBook;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("library.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_blank_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ShelfError::Storage(_)));
    }

    #[test]
    fn test_wrong_shape_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, r#"[{"title": "dune"}]"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ShelfError::Storage(_)));
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(
            &path,
            r#"[
                {"title": "dune", "author": "a", "year": "", "genre": "", "read": false},
                {"title": "DUNE", "author": "b", "year": "", "genre": "", "read": true}
            ]"#,
        )
        .unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("duplicate title"));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        let mut store = JsonFileStore::new(&path);
        let books = vec![NewBook::new("Dune", "Frank Herbert").into_book()];

        store.save(&books).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n    {\n        \"title\": \"dune\""));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shelf").join("library.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&[]).unwrap();

        assert!(path.exists());
        assert!(store.load().unwrap().is_empty());
    }
}
