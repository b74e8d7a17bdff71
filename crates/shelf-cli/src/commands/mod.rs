//! Command handlers for the Shelf CLI.

pub mod books;
pub mod menu;
pub mod misc;

pub use books::{handle_add, handle_list, handle_remove, handle_search, handle_stats};
pub use menu::handle_menu;
pub use misc::handle_completions;
