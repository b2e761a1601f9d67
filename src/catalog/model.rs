/// A single catalog entry.
///
/// Songs carry no identity beyond their fields, so two equal songs are still
/// two distinct catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub mood: String,
    pub genre: String,
}

impl Song {
    pub fn new(title: &str, artist: &str, mood: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            mood: mood.to_string(),
            genre: genre.to_string(),
        }
    }
}
