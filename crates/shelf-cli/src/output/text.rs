//! Text and table output formatting for books.

use shelf_core::{Book, LibraryStats};

use crate::ui::format::{or_dash, single_line};
use crate::ui::{badge, kv, print, table, Badge, Column, OutputMode, UiContext};

use super::json::{books_json, stats_json};

const TITLE_MAX: usize = 48;

pub const BOOK_COLUMNS: [Column; 5] = [
    Column::capped("Title", TITLE_MAX),
    Column::new("Author"),
    Column::new("Year"),
    Column::new("Genre"),
    Column::new("Status"),
];

/// One table row for a book.
pub fn book_row(book: &Book) -> Vec<String> {
    vec![
        single_line(&book.title),
        or_dash(&single_line(&book.author)).to_string(),
        or_dash(&book.year).to_string(),
        or_dash(&book.genre).to_string(),
        book.status_label().to_string(),
    ]
}

/// Print a list of books in the context's mode.
///
/// `empty_message` is shown (as info) when there is nothing to print.
pub fn print_book_list(
    ctx: &UiContext,
    books: &[Book],
    empty_message: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&books_json(books))?);
        }
        _ if books.is_empty() => {
            if !quiet {
                print(ctx, &badge(ctx, Badge::Info, empty_message));
            }
        }
        OutputMode::Lines => {
            for book in books {
                println!("{}", book);
            }
        }
        OutputMode::Plain | OutputMode::Pretty => {
            let rows: Vec<Vec<String>> = books.iter().map(book_row).collect();
            println!("{}", table(ctx, &BOOK_COLUMNS, &rows));
        }
    }
    Ok(())
}

/// Print library statistics.
pub fn print_stats(ctx: &UiContext, stats: &LibraryStats) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats_json(stats))?);
        return Ok(());
    }
    println!("{}", kv(ctx, "Total books", &stats.total.to_string()));
    println!("{}", kv(ctx, "Books read", &stats.read.to_string()));
    println!(
        "{}",
        kv(ctx, "Percentage read", &format!("{}%", stats.percent_display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::NewBook;

    #[test]
    fn test_book_row_fills_blanks() {
        let book = NewBook::new("Dune", "Frank Herbert").into_book();
        assert_eq!(
            book_row(&book),
            vec!["dune", "Frank Herbert", "-", "-", "Unread"]
        );
    }

    #[test]
    fn test_long_titles_are_capped_in_tables() {
        let ctx = UiContext {
            color: false,
            unicode: false,
            interactive: false,
            width: 80,
            mode: OutputMode::Plain,
        };
        let book = NewBook::new("a".repeat(100), "x").into_book();
        let out = table(&ctx, &BOOK_COLUMNS, &[book_row(&book)]);
        let title = out.split('\t').next().unwrap();
        assert_eq!(title.chars().count(), TITLE_MAX);
        assert!(title.ends_with("..."));
    }
}
