//! # CLI Behavior
//!
//! This is **one possible UI client** for bookshelf. It is the only place
//! that knows about stdin, stdout, exit codes and output formatting.
//!
//! ## Flow
//!
//! 1. `setup` parses the global options with clap.
//! 2. `logging` installs the tracing subscriber (stderr only).
//! 3. `commands` resolves the config into a `LibraryApi<FileStore>`.
//! 4. `menu` runs the numbered menu until "6" or end of input.
//! 5. `render` turns `CmdResult`s into the book table and colored messages.

mod commands;
mod logging;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
