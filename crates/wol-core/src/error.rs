//! Error type for link building and reference parsing.

use thiserror::Error;

/// Which template slot a token was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Book,
    Chapter,
}

impl std::fmt::Display for TokenField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenField::Book => write!(f, "book"),
            TokenField::Chapter => write!(f, "chapter"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// Token was the empty string.
    #[error("{field} token is empty")]
    EmptyToken { field: TokenField },
    /// Token holds characters that would change the meaning of the URL.
    #[error("{field} token {token:?} contains characters unsafe for a URL path segment")]
    UnsafeToken { field: TokenField, token: String },
    #[error("book number {0} is outside 1..={max}", max = crate::link::BOOK_COUNT)]
    BookOutOfRange(u32),
    #[error("chapter number must be at least 1 (got {0})")]
    ChapterOutOfRange(u32),
    /// Text was not of the form `book:chapter` or `book/chapter`.
    #[error("malformed chapter reference: {0:?}")]
    MalformedReference(String),
    #[error("invalid link config: {0}")]
    InvalidConfig(String),
}
