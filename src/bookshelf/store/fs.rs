use super::{DataStore, LoadOutcome};
use crate::error::{LibraryError, Result};
use crate::model::Book;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_STORAGE_FILE: &str = "library.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibraryError::Io)?;
            }
        }
        Ok(())
    }

    fn write_books(&self, books: &[Book]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books
            .serialize(&mut ser)
            .map_err(LibraryError::Serialization)?;
        fs::write(&self.path, buf).map_err(LibraryError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn ensure_initialized(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.ensure_parent_dir()?;
        self.write_books(&[])?;
        debug!(path = %self.path.display(), "created empty library file");
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::Loaded(Vec::new()));
        }
        let content = fs::read(&self.path).map_err(LibraryError::Io)?;
        match serde_json::from_slice::<Vec<Book>>(&content) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "loaded books");
                Ok(LoadOutcome::Loaded(books))
            }
            Err(e) => Ok(LoadOutcome::Corrupt {
                reason: e.to_string(),
            }),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        self.write_books(books)?;
        debug!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
