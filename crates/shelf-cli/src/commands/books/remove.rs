use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let mut library = ctx.open_library()?;

    let removed = library.remove(&args.title).map_err(CliError::from)?;

    if !ctx.quiet() {
        let remaining = library.len().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Removed book",
                &[("Title", removed.title.as_str()), ("Remaining", remaining.as_str())],
            ),
        );
    }
    Ok(())
}
