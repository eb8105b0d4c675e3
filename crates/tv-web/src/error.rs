//! Error types for the ticket viewer.
//!
//! Load failures are tagged by class so each can carry its own user-facing
//! message, while the underlying cause only ever reaches the log.

use thiserror::Error;
use tv_types::ParseError;

/// Why a ticket listing could not be shown.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected response status {status}")]
    Status { status: u16 },

    /// The body was not a well-formed ticket listing.
    #[error("invalid response: {0}")]
    Parse(#[from] ParseError),

    /// The page itself could not be read or updated.
    #[error("page error: {0}")]
    Page(#[from] PageError),
}

impl LoadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Network,
            Self::Status { .. } => FailureKind::Status,
            Self::Parse(_) => FailureKind::Parse,
            Self::Page(_) => FailureKind::Page,
        }
    }
}

/// Failure class of a load, without the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Status,
    Parse,
    Page,
}

/// Errors raised by a [`PageContext`](crate::context::PageContext) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("window not available")]
    NoWindow,

    #[error("storage not available: {0}")]
    Storage(String),

    #[error("element '#{0}' not found")]
    MissingContainer(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("navigation to '{target}' failed: {message}")]
    Navigation { target: String, message: String },

    #[error("could not encode request: {0}")]
    Encode(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
