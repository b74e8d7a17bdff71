use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::print_stats;
use crate::ui::{header, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, None);
    let library = ctx.open_library()?;

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "stats", None));
    }
    print_stats(&ui, &library.statistics())
}
