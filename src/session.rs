//! In-memory, append-only session lists (favorites and playlists).
//!
//! Nothing here is persisted; both lists start empty and are dropped with the
//! process.

mod list;

pub use list::*;
