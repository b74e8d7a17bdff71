//! Rendering primitives shared by the subcommands and the menu.
//!
//! Every function takes the `UiContext` and picks its shape from the mode:
//! pretty output is styled for people, everything else stays greppable.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::format::truncate;
use super::theme::{styled, styles, Badge};

/// Command banner such as `Shelf · search (tolkien)`.
///
/// Only meaningful in pretty mode; callers skip it otherwise.
pub fn header(ctx: &UiContext, command: &str, detail: Option<&str>) -> String {
    let app = styled("Shelf", styles::bold(), ctx.color);
    match detail {
        Some(detail) => format!("{} \u{00B7} {} ({})", app, command, detail),
        None => format!("{} \u{00B7} {}", app, command),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

/// `Total books: 4` when pretty, `total_books=4` otherwise.
pub fn kv(ctx: &UiContext, label: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", label), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", snake_key(label), value)
    }
}

fn snake_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Summary printed after a mutation: a badge and indented fields when
/// pretty, `status=ok` plus `key=value` lines otherwise.
pub fn receipt(ctx: &UiContext, title: &str, fields: &[(&str, &str)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(
            fields
                .iter()
                .map(|(label, value)| format!("{}{}", indent, kv(ctx, label, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// A table column, optionally capped to a number of characters.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub max_chars: Option<usize>,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            max_chars: None,
        }
    }

    pub const fn capped(header: &'static str, max_chars: usize) -> Self {
        Self {
            header,
            max_chars: Some(max_chars),
        }
    }

    fn fit(&self, cell: &str) -> String {
        match self.max_chars {
            Some(max) => truncate(cell, max),
            None => cell.to_string(),
        }
    }
}

/// Render rows under `columns`.
///
/// Pretty mode draws a borderless table with dim headers, wrapped to the
/// terminal width. Other modes emit one tab-separated line per row without
/// headers.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    let fitted: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(columns)
                .map(|(cell, column)| column.fit(cell))
                .collect()
        })
        .collect();

    if !ctx.mode.is_pretty() {
        return fitted
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));
    table.set_header(columns.iter().map(|column| {
        let cell = Cell::new(column.header);
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    }));
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    for row in fitted {
        table.add_row(row);
    }
    table.to_string()
}

/// Print to stdout unless the command is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// An error block: `[✗] message` plus a `Hint:` line when pretty,
/// `error=` / `hint=` lines otherwise.
pub fn error_message(ctx: &UiContext, message: &str, hint: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let mut block = badge(ctx, Badge::Err, message);
        if let Some(hint) = hint {
            let label = styled("Hint:", styles::dim(), ctx.color);
            block.push_str(&format!("\n{} {}", label, hint));
        }
        block
    } else {
        let mut block = format!("error={}", message);
        if let Some(hint) = hint {
            block.push_str(&format!("\nhint={}", hint));
        }
        block
    }
}

pub fn print_error(ctx: &UiContext, message: &str, hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn ui(mode: OutputMode, unicode: bool) -> UiContext {
        UiContext {
            color: false,
            unicode,
            interactive: false,
            width: 80,
            mode,
        }
    }

    fn book_columns() -> [Column; 3] {
        [
            Column::capped("Title", 10),
            Column::new("Author"),
            Column::new("Status"),
        ]
    }

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["dune".into(), "Frank Herbert".into(), "Read".into()],
            vec![
                "the left hand of darkness".into(),
                "Ursula K. Le Guin".into(),
                "Unread".into(),
            ],
        ]
    }

    #[test]
    fn test_header_with_search_term() {
        let line = header(&ui(OutputMode::Pretty, true), "search", Some("tolkien"));
        assert_eq!(line, "Shelf \u{00B7} search (tolkien)");
    }

    #[test]
    fn test_badge_follows_unicode_setting() {
        assert_eq!(
            badge(&ui(OutputMode::Plain, false), Badge::Warn, "Invalid choice"),
            "[WARN] Invalid choice"
        );
        assert_eq!(badge(&ui(OutputMode::Pretty, true), Badge::Ok, ""), "[\u{2713}]");
    }

    #[test]
    fn test_kv_per_mode() {
        assert_eq!(
            kv(&ui(OutputMode::Pretty, true), "Percentage read", "50.00%"),
            "Percentage read: 50.00%"
        );
        assert_eq!(
            kv(&ui(OutputMode::Lines, true), "Percentage read", "50.00%"),
            "percentage_read=50.00%"
        );
    }

    #[test]
    fn test_receipt_per_mode() {
        let fields = [("Title", "dune"), ("Status", "Read")];
        assert_eq!(
            receipt(&ui(OutputMode::Plain, false), "Added book", &fields),
            "status=ok\ntitle=dune\nstatus=Read"
        );
        assert_eq!(
            receipt(&ui(OutputMode::Pretty, false), "Added book", &fields),
            "[OK] Added book\n  Title: dune\n  Status: Read"
        );
    }

    #[test]
    fn test_plain_table_is_tab_separated_and_capped() {
        let out = table(&ui(OutputMode::Plain, false), &book_columns(), &rows());
        assert_eq!(
            out,
            "dune\tFrank Herbert\tRead\nthe lef...\tUrsula K. Le Guin\tUnread"
        );
    }

    #[test]
    fn test_pretty_table_has_headers_and_aligned_columns() {
        let out = table(&ui(OutputMode::Pretty, true), &book_columns(), &rows());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Title") && lines[0].contains("Author"));
        assert!(out.contains("the lef..."));
        let author_at = lines[0].find("Author").unwrap();
        assert_eq!(lines[1].find("Frank Herbert"), Some(author_at));
        assert_eq!(lines[2].find("Ursula"), Some(author_at));
    }

    #[test]
    fn test_error_message_per_mode() {
        assert_eq!(
            error_message(&ui(OutputMode::Plain, false), "disk full", Some("Check the path")),
            "error=disk full\nhint=Check the path"
        );
        let pretty = error_message(&ui(OutputMode::Pretty, true), "disk full", None);
        assert_eq!(pretty, "[\u{2717}] disk full");
    }
}
