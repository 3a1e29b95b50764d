use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::Book;
use crate::store::{DataStore, LoadOutcome, LoadPolicy};
use std::path::PathBuf;
use tracing::error;

/// Loads the catalogue, applying `policy` to a file that does not decode.
///
/// Under [`LoadPolicy::Lenient`] a corrupt file becomes an empty catalogue
/// and a warning is added to `result`. The next save overwrites it.
pub fn load_books<S: DataStore>(
    store: &S,
    policy: LoadPolicy,
    result: &mut CmdResult,
) -> Result<Vec<Book>> {
    match store.load()? {
        LoadOutcome::Loaded(books) => Ok(books),
        LoadOutcome::Corrupt { reason } => {
            error!(location = %store.location(), %reason, "failed to read library data");
            match policy {
                LoadPolicy::Strict => Err(LibraryError::CorruptStore {
                    path: PathBuf::from(store.location()),
                    reason,
                }),
                LoadPolicy::Lenient => {
                    result.add_message(CmdMessage::warning(format!(
                        "Could not read library data ({}), starting with an empty catalogue.",
                        reason
                    )));
                    Ok(Vec::new())
                }
            }
        }
    }
}

pub fn find_by_id<'a>(id: &str, books: &'a [Book]) -> Option<&'a Book> {
    books.iter().find(|b| b.id == id)
}

pub(crate) fn position_by_id(id: &str, books: &[Book]) -> Option<usize> {
    books.iter().position(|b| b.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::BookStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn find_by_id_returns_first_match() {
        let store = StoreFixture::new()
            .with_book("A", "X", 2000)
            .with_book("B", "Y", 2001)
            .build();

        let found = find_by_id("2", store.books()).unwrap();
        assert_eq!(found.title, "B");
        assert!(find_by_id("3", store.books()).is_none());
    }

    #[test]
    fn find_by_id_prefers_earlier_duplicate() {
        let books = vec![
            Book::new("7".into(), "First".into(), "A".into(), 1, BookStatus::Available),
            Book::new("7".into(), "Second".into(), "B".into(), 2, BookStatus::Available),
        ];
        assert_eq!(find_by_id("7", &books).unwrap().title, "First");
    }

    #[test]
    fn lenient_load_of_corrupt_store_warns() {
        let store = InMemoryStore::corrupt("expected value at line 1");
        let mut result = CmdResult::default();

        let books = load_books(&store, LoadPolicy::Lenient, &mut result).unwrap();

        assert!(books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("expected value"));
    }

    #[test]
    fn strict_load_of_corrupt_store_fails() {
        let store = InMemoryStore::corrupt("trailing comma");
        let mut result = CmdResult::default();

        let err = load_books(&store, LoadPolicy::Strict, &mut result).unwrap_err();
        assert!(matches!(err, LibraryError::CorruptStore { reason, .. } if reason == "trailing comma"));
    }
}
