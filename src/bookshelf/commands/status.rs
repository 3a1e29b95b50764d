use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::BookStatus;
use crate::store::{DataStore, LoadPolicy};
use tracing::debug;

use super::helpers::{load_books, position_by_id};

/// Sets the status of book `id` from an interactive status code ("1" or "2").
///
/// An unknown code is reported without reading the store. Setting the
/// status a book already has is reported and nothing is written.
pub fn run<S: DataStore>(
    store: &mut S,
    policy: LoadPolicy,
    id: &str,
    status_code: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let new_status = match BookStatus::from_code(status_code) {
        Ok(status) => status,
        Err(err @ LibraryError::InvalidStatusCode(_)) => {
            result.add_message(CmdMessage::error(err.to_string()));
            return Ok(result);
        }
        Err(err) => return Err(err),
    };

    let mut books = load_books(store, policy, &mut result)?;
    let Some(pos) = position_by_id(id, &books) else {
        result.add_message(CmdMessage::error(format!("Book with ID {} not found.", id)));
        return Ok(result);
    };

    if books[pos].status == new_status {
        result.add_message(CmdMessage::info(format!(
            "Book with ID {} is already {}.",
            id, new_status
        )));
        return Ok(result);
    }

    books[pos].status = new_status;
    store.save(&books)?;
    debug!(id, status = %new_status, "changed book status");

    result.add_message(CmdMessage::success(format!(
        "Status of book with ID {} changed to \"{}\".",
        id, new_status
    )));
    result.affected_books.push(books[pos].clone());
    Ok(result)
}
