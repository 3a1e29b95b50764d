//! Terminal rendering for book listings and command messages.
//!
//! Every `render_*` function returns a `String`; printing happens in the
//! menu. Colors are opt-in per call so tests can compare plain text.

use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::{Book, BookStatus};
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_LIBRARY: &str = "The library is empty.";

const ID_WIDTH: usize = 16;
const TITLE_WIDTH: usize = 20;
const AUTHOR_WIDTH: usize = 20;
const YEAR_WIDTH: usize = 5;
const STATUS_WIDTH: usize = 11;
const SEPARATOR_WIDTH: usize = 80;

/// Renders books as a fixed-width table with ID, title, author, year and
/// status columns, or the empty-library message when there are none.
///
/// Titles and authors longer than their column are cut with `…`. Ids never
/// are, since they are what the user types back into the menu.
pub fn render_books(books: &[Book], color: bool) -> String {
    if books.is_empty() {
        return format!("{}\n", EMPTY_LIBRARY);
    }

    let id_width = books
        .iter()
        .map(|b| b.id.width())
        .max()
        .unwrap_or(0)
        .max(ID_WIDTH);

    let mut output = String::new();
    let header = format!(
        "{} {} {} {} {}",
        pad_to_width("ID", id_width),
        pad_to_width("Title", TITLE_WIDTH),
        pad_to_width("Author", AUTHOR_WIDTH),
        pad_to_width("Year", YEAR_WIDTH),
        "Status"
    );
    if color {
        output.push_str(&format!("{}\n", header.bold()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    let separator_width = (id_width + TITLE_WIDTH + AUTHOR_WIDTH + YEAR_WIDTH + STATUS_WIDTH + 4)
        .max(SEPARATOR_WIDTH);
    output.push_str(&"-".repeat(separator_width));
    output.push('\n');

    for book in books {
        let status = book.status.label();
        let status = if color {
            match book.status {
                BookStatus::Available => status.green().to_string(),
                BookStatus::CheckedOut => status.yellow().to_string(),
            }
        } else {
            status.to_string()
        };

        output.push_str(&format!(
            "{} {} {} {} {}\n",
            pad_to_width(&book.id, id_width),
            pad_to_width(&book.title, TITLE_WIDTH),
            pad_to_width(&book.author, AUTHOR_WIDTH),
            pad_to_width(&book.year.to_string(), YEAR_WIDTH),
            status
        ));
    }

    output
}

pub fn render_messages(messages: &[CmdMessage], color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            if !color {
                return format!("{}\n", message.content);
            }
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let cell = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
