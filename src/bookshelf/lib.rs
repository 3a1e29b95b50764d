//! # Bookshelf Architecture
//!
//! Bookshelf is a personal library catalogue: books with a title, author,
//! year and lending status, kept in a single JSON file. The crate is a
//! library with a small interactive console client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, table rendering, logging setup       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - LibraryApi facade, owns the store and the load policy    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, search, status, list                        │
//! │  - Load everything, change it, save everything              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr. Diagnostics go
//! through `tracing`; user-facing outcomes are returned as messages in a
//! [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per catalogue operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `BookStatus` and id generation
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
