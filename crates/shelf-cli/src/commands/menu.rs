//! Interactive numbered menu.
//!
//! The session reads answers line by line from any `BufRead` and writes to
//! any `Write`, so it behaves the same on a terminal and with piped input.
//! A failed operation is reported and the loop continues; end of input is
//! treated as Exit.

use std::io::{self, BufRead, Write};

use tracing::error;

use shelf_core::{BookStore, Library, NewBook, ShelfError};

use crate::app::AppContext;
use crate::helpers::parse_read_answer;
use crate::ui::render::error_message;
use crate::ui::{badge, kv, Badge, UiContext};

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    DisplayAll,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::DisplayAll,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::DisplayAll),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Self::Add => 1,
            Self::Remove => 2,
            Self::Search => 3,
            Self::DisplayAll => 4,
            Self::Statistics => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add a book",
            Self::Remove => "Remove a book",
            Self::Search => "Search the library",
            Self::DisplayAll => "Display all books",
            Self::Statistics => "Display statistics",
            Self::Exit => "Exit",
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a library.
pub struct MenuSession<'a, R, W> {
    ui: &'a UiContext,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(ui: &'a UiContext, input: R, out: W) -> Self {
        Self { ui, input, out }
    }

    /// Print `prompt` and read one trimmed answer; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }

    /// Greet `name` and run the menu loop until Exit or end of input.
    pub fn run<S: BookStore>(&mut self, library: &mut Library<S>, name: &str) -> io::Result<()> {
        let greeting = if name.is_empty() {
            "Welcome to Shelf".to_string()
        } else {
            format!("Welcome to Shelf, {}", name)
        };
        writeln!(self.out, "{}", greeting)?;

        loop {
            self.print_menu()?;
            let Some(answer) = self.ask("Enter your choice")? else {
                break;
            };
            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => self.add(library)?,
                Some(MenuChoice::Remove) => self.remove(library)?,
                Some(MenuChoice::Search) => self.search(library)?,
                Some(MenuChoice::DisplayAll) => self.display_all(library)?,
                Some(MenuChoice::Statistics) => self.statistics(library)?,
                Some(MenuChoice::Exit) => Flow::Quit,
                None => {
                    self.line(&badge(self.ui, Badge::Warn, "Invalid choice. Please try again!"))?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Menu")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "  {}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn report(&mut self, err: ShelfError) -> io::Result<()> {
        let message = match &err {
            ShelfError::DuplicateTitle(title) => {
                format!("Book '{}' already exists in the library!", title)
            }
            ShelfError::NotFound(title) => format!("Book '{}' not found in the library!", title),
            ShelfError::InvalidInput(message) | ShelfError::Storage(message) => message.clone(),
        };
        if err.is_rejection() {
            return self.line(&badge(self.ui, Badge::Warn, &message));
        }
        error!(%message, "library storage failed");
        self.line(&error_message(
            self.ui,
            &message,
            Some("The library file could not be read or written."),
        ))
    }

    fn add<S: BookStore>(&mut self, library: &mut Library<S>) -> io::Result<Flow> {
        let Some(title) = self.ask("Title")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.ask("Author")? else {
            return Ok(Flow::Quit);
        };
        let Some(year) = self.ask("Year")? else {
            return Ok(Flow::Quit);
        };
        let Some(genre) = self.ask("Genre")? else {
            return Ok(Flow::Quit);
        };
        let Some(read) = self.ask("Have you read the book? (yes/no)")? else {
            return Ok(Flow::Quit);
        };

        let new_book = NewBook::new(title, author)
            .with_year(year)
            .with_genre(genre)
            .with_read(parse_read_answer(&read));
        match library.add(new_book) {
            Ok(book) => {
                let message = format!("Book '{}' added successfully.", book.title);
                self.line(&badge(self.ui, Badge::Ok, &message))?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove<S: BookStore>(&mut self, library: &mut Library<S>) -> io::Result<Flow> {
        let Some(title) = self.ask("Title of the book to remove")? else {
            return Ok(Flow::Quit);
        };
        match library.remove(&title) {
            Ok(book) => {
                let message = format!("Book '{}' removed successfully.", book.title);
                self.line(&badge(self.ui, Badge::Ok, &message))?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn search<S: BookStore>(&mut self, library: &mut Library<S>) -> io::Result<Flow> {
        let Some(term) = self.ask("Enter a title or author to search for")? else {
            return Ok(Flow::Quit);
        };
        match library.search(&term) {
            Ok(results) if results.is_empty() => {
                let message = format!("No books found matching '{}'.", term.to_lowercase());
                self.line(&badge(self.ui, Badge::Info, &message))?;
            }
            Ok(results) => {
                for book in &results {
                    self.line(&book.to_string())?;
                }
            }
            Err(err) => self.report(err)?,
        }
        Ok(Flow::Continue)
    }

    fn display_all<S: BookStore>(&mut self, library: &Library<S>) -> io::Result<Flow> {
        if library.is_empty() {
            self.line(&badge(self.ui, Badge::Info, "The library is empty!"))?;
        }
        for book in library.list_all() {
            self.line(&book.to_string())?;
        }
        Ok(Flow::Continue)
    }

    fn statistics<S: BookStore>(&mut self, library: &Library<S>) -> io::Result<Flow> {
        let stats = library.statistics();
        self.line(&kv(self.ui, "Total books", &stats.total.to_string()))?;
        self.line(&kv(
            self.ui,
            "Percentage read",
            &format!("{}%", stats.percent_display()),
        ))?;
        Ok(Flow::Continue)
    }
}

/// Run the interactive menu on stdin/stdout.
pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui(false, None);
    let mut library = ctx.open_library()?;
    let configured_name = ctx.reader_name()?.map(str::to_string);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(&ui, stdin.lock(), stdout.lock());

    let name = match configured_name {
        Some(name) => name,
        None => match session.ask("Enter your name")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    session.run(&mut library, &name)?;
    Ok(())
}
