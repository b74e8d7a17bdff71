//! JSON output formatting for books and statistics.

use shelf_core::{Book, LibraryStats};

/// Convert books to a JSON array, same shape as the library file.
pub fn books_json(books: &[Book]) -> serde_json::Value {
    serde_json::json!(books)
}

/// Convert statistics to JSON for output.
pub fn stats_json(stats: &LibraryStats) -> serde_json::Value {
    serde_json::json!({
        "total": stats.total,
        "read": stats.read,
        "percent_read": (stats.percent_read * 100.0).round() / 100.0,
    })
}
