//! Storage backend trait definition.
//!
//! The `BookStore` trait defines the interface that all storage backends
//! must implement. Backends load and save the whole collection at once.

use super::types::Book;
use crate::error::Result;

/// Wholesale persistence of an ordered book collection.
///
/// All implementations must ensure:
/// - `load` on a store that has never been saved returns an empty collection
/// - `save` replaces the previous content entirely
/// - Insertion order is preserved across `save` / `load`
pub trait BookStore {
    /// Load the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if:
    /// - The backing storage cannot be read
    /// - The stored content is not a valid book collection
    fn load(&self) -> Result<Vec<Book>>;

    /// Persist the full collection, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the collection cannot be written
    /// (permission denied, disk full, ...).
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human-readable description of where the collection lives.
    fn location(&self) -> String;
}
