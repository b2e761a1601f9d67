//! Read-only queries over a [`Catalog`].
//!
//! Every function here is pure: it borrows the catalog, returns matches in
//! catalog order and treats "no matches" as an empty result, never an error.

use std::fmt;

use tracing::debug;

use crate::catalog::{Catalog, Song};

/// A `(title, artist)` pair produced by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMatch {
    pub title: String,
    pub artist: String,
}

impl SongMatch {
    /// Join title and artist with a custom separator (the UI makes it configurable).
    pub fn joined(&self, sep: &str) -> String {
        format!("{}{}{}", self.title, sep, self.artist)
    }
}

impl From<&Song> for SongMatch {
    fn from(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
        }
    }
}

impl fmt::Display for SongMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

fn select(catalog: &Catalog, pred: impl Fn(&Song) -> bool) -> Vec<SongMatch> {
    catalog
        .songs()
        .iter()
        .filter(|s| pred(s))
        .map(SongMatch::from)
        .collect()
}

/// Songs whose mood equals `mood`, ignoring case.
pub fn filter_by_mood(catalog: &Catalog, mood: &str) -> Vec<SongMatch> {
    let mood = mood.to_lowercase();
    let out = select(catalog, |s| s.mood.to_lowercase() == mood);
    debug!(%mood, matches = out.len(), "filter by mood");
    out
}

/// Songs whose genre equals `genre`, ignoring case.
pub fn filter_by_genre(catalog: &Catalog, genre: &str) -> Vec<SongMatch> {
    let genre = genre.to_lowercase();
    let out = select(catalog, |s| s.genre.to_lowercase() == genre);
    debug!(%genre, matches = out.len(), "filter by genre");
    out
}

/// Songs whose title or artist contains `term` as a case-insensitive substring.
///
/// An empty term is contained in every string, so it matches the whole catalog.
pub fn search_by_text(catalog: &Catalog, term: &str) -> Vec<SongMatch> {
    let term = term.to_lowercase();
    let out = select(catalog, |s| {
        s.title.to_lowercase().contains(&term) || s.artist.to_lowercase().contains(&term)
    });
    debug!(%term, matches = out.len(), "search by text");
    out
}
