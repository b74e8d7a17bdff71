//! Core data types for the storage layer.
//!
//! A `Book` is exactly what is persisted: five fields, in this order, with
//! the title already normalized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize a title into its uniqueness key (trimmed, lowercase).
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Normalized (lowercase) title, unique within a library
    pub title: String,

    /// Author, free text
    pub author: String,

    /// Publication year, free text
    pub year: String,

    /// Genre, free text
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// Whether the title or author contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Human-readable read status.
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} - {} - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Builder for adding a book to a library.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Convert into a stored `Book`, normalizing the title and trimming the
    /// free-text fields.
    pub fn into_book(self) -> Book {
        Book {
            title: normalize_title(&self.title),
            author: self.author.trim().to_string(),
            year: self.year.trim().to_string(),
            genre: self.genre.trim().to_string(),
            read: self.read,
        }
    }
}

/// Summary statistics for a library.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LibraryStats {
    /// Number of books
    pub total: usize,

    /// Number of books marked read
    pub read: usize,

    /// Percentage of books marked read, 0.0 for an empty library
    pub percent_read: f64,
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|book| book.read).count();
        let percent_read = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };
        Self {
            total,
            read,
            percent_read,
        }
    }

    /// Percentage rendered with two decimals, e.g. `50.00`.
    pub fn percent_display(&self) -> String {
        format!("{:.2}", self.percent_read)
    }
}
