//! Error types returned by the store

use thiserror::Error;

/// Errors produced by [`Store`](crate::Store) lookups and pattern queries
#[derive(Debug, Error)]
pub enum Error {
    /// The requested key has no entry
    #[error("key does not exist")]
    NotExist,

    /// A pattern query completed without matching any key
    #[error("no keys match")]
    NoMatch,

    /// The glob pattern is malformed, e.g. an unterminated character class
    #[error("syntax error in pattern at position {pos}: {msg}")]
    InvalidPattern { pos: usize, msg: &'static str },
}

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Error::InvalidPattern {
            pos: err.pos,
            msg: err.msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
