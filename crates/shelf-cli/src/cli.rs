use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::VERSION;

use crate::ui::DisplayFlags;

/// Shelf - A personal, CLI-first book library tracker
///
/// Run without a subcommand to start the interactive menu.
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, global = true, env = "SHELF_PATH")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

impl Cli {
    pub fn display_flags(&self) -> DisplayFlags {
        DisplayFlags {
            no_color: self.no_color,
            ascii: self.ascii,
        }
    }
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title (stored lowercase)
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Genre
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Mark the book as read
    #[arg(long)]
    pub read: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Title of the book to remove (any case)
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles and authors
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show unread books
    #[arg(long, conflicts_with = "read_only")]
    pub unread: bool,

    /// Only show books already read
    #[arg(long)]
    pub read_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Add a book to the library
    Add(AddArgs),

    /// Remove a book by title
    Remove(RemoveArgs),

    /// Search titles and authors
    Search(SearchArgs),

    /// Display all books
    List(ListArgs),

    /// Show library statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
