use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, LoadPolicy};

use super::helpers::load_books;

pub fn run<S: DataStore>(store: &S, policy: LoadPolicy, keyword: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = load_books(store, policy, &mut result)?;

    let matches: Vec<_> = books.into_iter().filter(|b| b.matches(keyword)).collect();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }

    Ok(result.with_listed_books(matches))
}
