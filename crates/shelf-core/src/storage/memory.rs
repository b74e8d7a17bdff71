//! In-memory storage backend.

use super::ensure_unique_titles;
use super::traits::BookStore;
use super::types::Book;
use crate::error::{Result, ShelfError};

/// A book store that lives only in memory.
///
/// Useful for embedding the library without touching the filesystem. A store
/// can be made to fail its next saves via [`MemoryStore::fail_saves`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    books: Option<Vec<Book>>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Some(books),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Overwrite the persisted collection directly, bypassing any library.
    pub fn replace(&mut self, books: Vec<Book>) {
        self.books = Some(books);
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        let books = self.books.clone().unwrap_or_default();
        ensure_unique_titles(&books)?;
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(ShelfError::Storage("memory store is read-only".to_string()));
        }
        self.books = Some(books.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
