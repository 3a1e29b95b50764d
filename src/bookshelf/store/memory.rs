use super::{DataStore, LoadOutcome};
use crate::error::Result;
use crate::model::Book;

/// Keeps the catalogue in memory. Used by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    corrupt: Option<String>,
    initialized: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose contents fail to decode with `reason`.
    pub fn corrupt(reason: &str) -> Self {
        Self {
            corrupt: Some(reason.to_string()),
            initialized: true,
            ..Self::default()
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of times [`DataStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn ensure_initialized(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        match &self.corrupt {
            Some(reason) => Ok(LoadOutcome::Corrupt {
                reason: reason.clone(),
            }),
            None => Ok(LoadOutcome::Loaded(self.books.clone())),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.corrupt = None;
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookStatus;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_book(self, title: &str, author: &str, year: i32) -> Self {
            self.with_book_status(title, author, year, BookStatus::Available)
        }

        pub fn with_book_status(
            mut self,
            title: &str,
            author: &str,
            year: i32,
            status: BookStatus,
        ) -> Self {
            self.store.books.push(Book::new(
                self.next_id.to_string(),
                title.to_string(),
                author.to_string(),
                year,
                status,
            ));
            self.next_id += 1;
            self
        }

        /// Finishes the fixture with a zeroed write counter.
        pub fn build(mut self) -> InMemoryStore {
            self.store.initialized = true;
            self.store.saves = 0;
            self.store
        }
    }
}
