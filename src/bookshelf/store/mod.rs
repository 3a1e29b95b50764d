//! # Storage Layer
//!
//! The whole catalogue lives in one JSON array. A store only knows how to
//! read that array back and write it out again; every mutation is a full
//! load, change, save cycle driven by the command layer.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file (default
//!   `library.json`). Written pretty-printed with a 4 space indent.
//! - [`memory::InMemoryStore`]: Keeps the array in memory and counts writes,
//!   so command tests can assert that a no-op did not persist anything.
//!
//! ## Corrupt files
//!
//! A file that exists but does not decode is not an error at this level.
//! [`DataStore::load`] returns [`LoadOutcome::Corrupt`] and the caller picks
//! the policy (see [`LoadPolicy`]).

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Result of reading the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Book>),
    Corrupt { reason: String },
}

impl LoadOutcome {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }

    /// The loaded books, or an empty set for a corrupt file.
    pub fn into_books(self) -> Vec<Book> {
        match self {
            LoadOutcome::Loaded(books) => books,
            LoadOutcome::Corrupt { .. } => Vec::new(),
        }
    }
}

/// What to do when the catalogue file does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log it, warn the user and carry on with an empty catalogue.
    #[default]
    Lenient,
    /// Fail the operation without touching the file.
    Strict,
}

/// Abstract interface for catalogue storage.
pub trait DataStore {
    /// Create the backing storage holding an empty catalogue if it is missing.
    fn ensure_initialized(&mut self) -> Result<()>;

    /// Read the full record set.
    fn load(&self) -> Result<LoadOutcome>;

    /// Overwrite the full record set.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human-readable location of the data, used in messages.
    fn location(&self) -> String;
}
