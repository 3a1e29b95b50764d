use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Lending state of a book.
///
/// Older catalogue files stored the Russian labels, so those are accepted on
/// read and rewritten in the canonical form on the next save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    #[serde(rename = "checked_out", alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    /// Maps the interactive status code ("1" or "2") to a status.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim() {
            "1" => Ok(BookStatus::Available),
            "2" => Ok(BookStatus::CheckedOut),
            other => Err(LibraryError::InvalidStatusCode(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: String, title: String, author: String, year: i32, status: BookStatus) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status,
        }
    }

    /// Case-insensitive substring match on title or author, exact match on year.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword_lower)
            || self.author.to_lowercase().contains(&keyword_lower)
            || self.year.to_string() == keyword
    }
}

/// Returns a fresh id derived from `now_micros`.
///
/// Ids are decimal microsecond timestamps. When the clock has not moved past
/// the newest id in `books` (two adds inside the same microsecond, or a clock
/// step backwards) the id is bumped to one past that newest id. If the
/// newest id is `i64::MAX` the first free id from `now_micros` upwards is used.
pub fn next_book_id(now_micros: i64, books: &[Book]) -> String {
    let newest = books
        .iter()
        .filter_map(|b| b.id.parse::<i64>().ok())
        .max();

    let candidate = match newest {
        Some(max) if now_micros <= max => max.checked_add(1),
        _ => Some(now_micros),
    };
    if let Some(id) = candidate {
        return id.to_string();
    }

    let taken: HashSet<&str> = books.iter().map(|b| b.id.as_str()).collect();
    let mut id = now_micros;
    while taken.contains(id.to_string().as_str()) {
        id = id.wrapping_add(1);
    }
    id.to_string()
}
