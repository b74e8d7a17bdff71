use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::print_book_list;
use crate::ui::{header, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ui = ctx.ui(args.json, format);
    let library = ctx.open_library()?;

    let mut books = library.list_all().to_vec();
    let filter = if args.unread {
        books.retain(|book| !book.read);
        Some("unread")
    } else if args.read_only {
        books.retain(|book| book.read);
        Some("read")
    } else {
        None
    };

    let empty_message = if library.is_empty() {
        "The library is empty"
    } else {
        "No books match the filter"
    };

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "list", filter));
    }
    print_book_list(&ui, &books, empty_message, ctx.quiet())
}
