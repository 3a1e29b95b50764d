//! The interactive numbered menu.
//!
//! Generic over its input and output so tests can drive it with an
//! in-memory script. Catalogue failures are printed and the loop goes on;
//! only failures to read the input or write the output end it.

use super::render::{render_books, render_messages};
use bookshelf::api::{CmdMessage, LibraryApi, NewBook};
use bookshelf::error::Result;
use bookshelf::store::DataStore;
use std::io::{BufRead, Write};
use tracing::warn;

const GREETING: &str = "Welcome to the console library!";
const MENU: &str = "
1. Add a book
2. Delete a book
3. Search books
4. Show all books
5. Change book status
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Delete,
    Search,
    List,
    ChangeStatus,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Delete),
            "3" => Some(Choice::Search),
            "4" => Some(Choice::List),
            "5" => Some(Choice::ChangeStatus),
            "6" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Runs until the user picks "Exit" or the input ends.
    pub fn run<S: DataStore>(&mut self, api: &mut LibraryApi<S>) -> Result<()> {
        writeln!(self.output, "{}", GREETING)?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an action: ")? else {
                break;
            };

            let Some(choice) = Choice::parse(&line) else {
                self.print_messages(&[CmdMessage::error("Invalid choice. Please try again.")])?;
                continue;
            };

            if choice == Choice::Exit {
                writeln!(self.output, "Exiting.")?;
                break;
            }

            if !self.dispatch(api, choice)? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Handles one menu action. Returns `false` when the input ran out.
    fn dispatch<S: DataStore>(&mut self, api: &mut LibraryApi<S>, choice: Choice) -> Result<bool> {
        let outcome = match choice {
            Choice::Add => {
                let Some(title) = self.prompt("Enter the book title: ")? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt("Enter the book author: ")? else {
                    return Ok(false);
                };
                let Some(year) = self.prompt_year()? else {
                    return Ok(false);
                };
                api.add_book(NewBook::new(title, author, year))
            }
            Choice::Delete => {
                let Some(id) = self.prompt("Enter the book ID: ")? else {
                    return Ok(false);
                };
                api.delete_book(&id)
            }
            Choice::Search => {
                let Some(keyword) = self.prompt("Enter a search keyword: ")? else {
                    return Ok(false);
                };
                api.search_books(&keyword)
            }
            Choice::List => api.list_books(),
            Choice::ChangeStatus => {
                let Some(id) = self.prompt("Enter the book ID: ")? else {
                    return Ok(false);
                };
                let Some(code) =
                    self.prompt("Choose the new status (\"1\" - available, \"2\" - checked out): ")?
                else {
                    return Ok(false);
                };
                api.change_status(&id, &code)
            }
            Choice::Exit => return Ok(false),
        };

        match outcome {
            Ok(result) => {
                let shows_table = choice == Choice::List
                    || (choice == Choice::Search && !result.listed_books.is_empty());
                if shows_table {
                    write!(
                        self.output,
                        "{}",
                        render_books(&result.listed_books, self.color)
                    )?;
                }
                self.print_messages(&result.messages)?;
            }
            Err(e) => {
                warn!(error = %e, "operation failed");
                self.print_messages(&[CmdMessage::error(format!("Error: {}", e))])?;
            }
        }
        Ok(true)
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt_year(&mut self) -> Result<Option<i32>> {
        loop {
            let Some(line) = self.prompt("Enter the publication year: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(year) => return Ok(Some(year)),
                Err(_) => self.print_messages(&[CmdMessage::error(
                    "Invalid input. The year must be a number.",
                )])?,
            }
        }
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write!(self.output, "{}", render_messages(messages, self.color))?;
        Ok(())
    }
}
