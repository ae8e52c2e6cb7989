//! In-memory key/value store keyed by `/`-separated paths.
//!
//! Supports exact lookups, glob queries over keys and directory-style
//! listing of the children under a prefix. A [`Store`] is safe to share
//! between threads.

pub mod config;
pub mod error;
pub mod pattern;
pub mod protocol;
pub mod shell;
pub mod store;

pub use error::{Error, Result};
pub use store::{KvPair, Store};
