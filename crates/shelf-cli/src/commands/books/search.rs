use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::print_book_list;
use crate::ui::{header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ui = ctx.ui(args.json, format);
    let mut library = ctx.open_library()?;

    let results = library.search(&args.term).map_err(CliError::from)?;

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "search", Some(args.term.as_str())));
    }
    print_book_list(
        &ui,
        &results,
        &format!("No books found matching '{}'", args.term.to_lowercase()),
        ctx.quiet(),
    )
}
