//! Storage layer: data types, the backend trait, and its implementations.

mod json_file;
mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BookStore;
pub use types::{normalize_title, Book, LibraryStats, NewBook};

use std::collections::HashSet;

use crate::error::{Result, ShelfError};

/// Reject a loaded collection that breaks the one-book-per-title invariant.
pub(crate) fn ensure_unique_titles(books: &[Book]) -> Result<()> {
    let mut seen = HashSet::with_capacity(books.len());
    for book in books {
        let key = normalize_title(&book.title);
        if !seen.insert(key.clone()) {
            return Err(ShelfError::Storage(format!(
                "malformed library data: duplicate title \"{}\"",
                key
            )));
        }
    }
    Ok(())
}
