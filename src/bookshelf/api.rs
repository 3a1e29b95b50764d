//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for catalogue operations. It
//! owns the store and the load policy, dispatches to the command modules and
//! returns their [`CmdResult`](commands::CmdResult) untouched.
//!
//! Like the command layer it performs no terminal I/O: rendering the books
//! and messages in a result is left to the UI (see the binary's `cli`).
//!
//! `LibraryApi<S: DataStore>` is generic over the store:
//! - Production: `LibraryApi<FileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Book;
use crate::store::{DataStore, LoadPolicy};

pub struct LibraryApi<S: DataStore> {
    store: S,
    policy: LoadPolicy,
}

impl<S: DataStore> LibraryApi<S> {
    /// Wraps `store`, creating its backing storage if it does not exist yet.
    pub fn new(mut store: S, policy: LoadPolicy) -> Result<Self> {
        store.ensure_initialized()?;
        Ok(Self { store, policy })
    }

    pub fn add_book(&mut self, new_book: commands::add::NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.policy, new_book)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, self.policy, id.trim())
    }

    pub fn search_books(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, self.policy, keyword)
    }

    pub fn change_status(&mut self, id: &str, status_code: &str) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, self.policy, id.trim(), status_code)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.policy)
    }

    /// Looks up a single book by id.
    pub fn find_book(&self, id: &str) -> Result<Option<Book>> {
        let mut scratch = commands::CmdResult::default();
        let books = commands::helpers::load_books(&self.store, self.policy, &mut scratch)?;
        Ok(commands::helpers::find_by_id(id.trim(), &books).cloned())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }
}

pub use commands::add::NewBook;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
