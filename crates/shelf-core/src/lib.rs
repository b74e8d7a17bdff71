//! # Shelf Core
//!
//! Core library for Shelf - a personal, CLI-first book library tracker.
//!
//! This crate provides the book data model, storage backends, and the
//! library operations (add, remove, search, list, statistics) independent of
//! the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Storage trait, JSON file backend, in-memory backend
//! - **library**: The `Library` store that keeps one in-memory copy in sync
//!   with its backend
//! - **error**: Error taxonomy shared by all operations

pub mod error;
pub mod fs;
pub mod library;
pub mod storage;

pub use error::{Result, ShelfError};
pub use library::Library;
pub use storage::{Book, BookStore, JsonFileStore, LibraryStats, MemoryStore, NewBook};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
