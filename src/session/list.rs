use tracing::{info, warn};

use crate::error::{InputValidationError, ListKind};

/// Ordered list of free-text entries that only ever grows.
#[derive(Debug, Clone)]
pub struct SessionList {
    kind: ListKind,
    entries: Vec<String>,
}

impl SessionList {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Append `entry` unchanged, rejecting empty or whitespace-only text.
    pub fn add(&mut self, entry: impl Into<String>) -> Result<(), InputValidationError> {
        let entry = entry.into();
        if entry.trim().is_empty() {
            warn!(list = %self.kind, "rejected empty entry");
            return Err(InputValidationError { list: self.kind });
        }
        info!(list = %self.kind, %entry, "added entry");
        self.entries.push(entry);
        Ok(())
    }

    /// Every entry in insertion order.
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The two lists owned by one running session.
#[derive(Debug, Clone)]
pub struct Session {
    pub favorites: SessionList,
    pub playlists: SessionList,
}

impl Session {
    pub fn new() -> Self {
        Self {
            favorites: SessionList::new(ListKind::Favorites),
            playlists: SessionList::new(ListKind::Playlists),
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut SessionList {
        match kind {
            ListKind::Favorites => &mut self.favorites,
            ListKind::Playlists => &mut self.playlists,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
