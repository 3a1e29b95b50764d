use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, LoadPolicy};

use super::helpers::load_books;

pub fn run<S: DataStore>(store: &S, policy: LoadPolicy) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = load_books(store, policy, &mut result)?;
    Ok(result.with_listed_books(books))
}
