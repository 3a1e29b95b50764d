use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{next_book_id, Book, BookStatus};
use crate::store::{DataStore, LoadPolicy};
use chrono::Utc;
use tracing::debug;

use super::helpers::load_books;

/// Fields for a new catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }
}

pub fn run<S: DataStore>(store: &mut S, policy: LoadPolicy, new_book: NewBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = load_books(store, policy, &mut result)?;

    let id = next_book_id(Utc::now().timestamp_micros(), &books);
    let book = Book::new(
        id,
        new_book.title,
        new_book.author,
        new_book.year,
        new_book.status,
    );
    books.push(book.clone());
    store.save(&books)?;
    debug!(id = %book.id, "added book");

    result.add_message(CmdMessage::success(format!(
        "Book \"{}\" added to the library (ID {}).",
        book.title, book.id
    )));
    result.affected_books.push(book);
    Ok(result)
}
