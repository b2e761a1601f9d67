//! Error types shared by the core modules.

use std::fmt;

use thiserror::Error;

/// Which session list an operation targeted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListKind {
    Favorites,
    Playlists,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Favorites => f.write_str("favorites"),
            ListKind::Playlists => f.write_str("playlists"),
        }
    }
}

/// Raised when an empty or whitespace-only entry is added to a session list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{list}: entry must not be empty")]
pub struct InputValidationError {
    pub list: ListKind,
}
