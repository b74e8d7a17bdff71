//! Shelf CLI - A personal, CLI-first book library tracker
//!
//! This is the command-line interface for Shelf. With no subcommand it runs
//! the interactive menu; subcommands expose the same operations to scripts.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};
use errors::CliError;
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        let ui = UiContext::from_env(cli.display_flags(), false, None);
        let code = match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                print_error(&ui, cli_err.message(), cli_err.hint());
                cli_err.exit_code()
            }
            None => {
                print_error(&ui, &format!("{:#}", err), None);
                1
            }
        };
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        None | Some(Commands::Menu) => commands::handle_menu(&ctx),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::Remove(args)) => commands::handle_remove(&ctx, args),
        Some(Commands::Search(args)) => commands::handle_search(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Stats(args)) => commands::handle_stats(&ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
    }
}
