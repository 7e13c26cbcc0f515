use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A quoted value that does not start and end with an unescaped `"`.
    #[error("malformed quoted string: {literal}")]
    MalformedQuote { literal: String },

    /// A backslash with nothing left to escape.
    #[error("unterminated escape at offset {offset}")]
    UnterminatedEscape { offset: usize },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Unwraps `Line` to the error that rejected the line.
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
