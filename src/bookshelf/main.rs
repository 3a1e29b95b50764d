//! # Bookshelf CLI
//!
//! The binary is intentionally thin: the console client lives in `src/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! The client is an interactive numbered menu (add, delete, search, list,
//! change status, exit) reading from stdin. Global options select the
//! catalogue file and tune logging and colors; see `cli::setup`.
//!
//! Everything it does goes through [`bookshelf::api::LibraryApi`], so the
//! library stays free of terminal concerns.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
