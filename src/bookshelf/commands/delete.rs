use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, LoadPolicy};
use tracing::debug;

use super::helpers::{load_books, position_by_id};

pub fn run<S: DataStore>(store: &mut S, policy: LoadPolicy, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = load_books(store, policy, &mut result)?;

    match position_by_id(id, &books) {
        Some(pos) => {
            let book = books.remove(pos);
            store.save(&books)?;
            debug!(id, "deleted book");
            result.add_message(CmdMessage::success(format!(
                "Book with ID {} deleted: {}",
                id, book.title
            )));
            result.affected_books.push(book);
        }
        None => {
            result.add_message(CmdMessage::error(format!("Book with ID {} not found.", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_matching_book() {
        let mut store = StoreFixture::new()
            .with_book("A", "X", 2000)
            .with_book("B", "Y", 2001)
            .with_book("C", "Z", 2002)
            .build();

        let result = run(&mut store, LoadPolicy::Lenient, "2").unwrap();

        let titles: Vec<_> = store.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(result.affected_books[0].title, "B");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn missing_id_is_a_no_op() {
        let mut store = StoreFixture::new().with_book("A", "X", 2000).build();
        let before = store.books().to_vec();

        let result = run(&mut store, LoadPolicy::Lenient, "999").unwrap();

        assert_eq!(store.books(), before.as_slice());
        assert_eq!(store.save_count(), 0);
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("not found"));
    }
}
