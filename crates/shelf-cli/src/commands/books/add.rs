use shelf_core::{NewBook, ShelfError};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_confirm, prompt_text};
use crate::ui::format::or_dash;
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let mut library = ctx.open_library()?;

    // Fail before prompting for the remaining fields.
    if let Some(existing) = library.get(&args.title) {
        return Err(CliError::from(ShelfError::DuplicateTitle(existing.title.clone())).into());
    }

    let interactive = !args.no_input && args.author.is_none() && ui.is_interactive();
    let field = |value: &Option<String>, prompt: &str| -> anyhow::Result<String> {
        match value {
            Some(v) => Ok(v.clone()),
            None if interactive => prompt_text(prompt),
            None => Ok(String::new()),
        }
    };

    let author = field(&args.author, "Author")?;
    let year = field(&args.year, "Year")?;
    let genre = field(&args.genre, "Genre")?;
    let read = args.read || (interactive && prompt_confirm("Have you read it?", false)?);

    let new_book = NewBook::new(&args.title, author)
        .with_year(year)
        .with_genre(genre)
        .with_read(read);
    let book = library.add(new_book).map_err(CliError::from)?;

    if !ctx.quiet() {
        print(
            &ui,
            &receipt(
                &ui,
                "Added book",
                &[
                    ("Title", book.title.as_str()),
                    ("Author", or_dash(&book.author)),
                    ("Status", book.status_label()),
                ],
            ),
        );
    }
    Ok(())
}
