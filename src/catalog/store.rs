use super::model::Song;

/// Ordered, read-only collection of songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from an explicit list (tests and custom hosts).
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// The ten built-in songs.
    pub fn builtin() -> Self {
        Self::from_songs(vec![
            Song::new("Happy", "Pharrell Williams", "happy", "pop"),
            Song::new("Someone Like You", "Adele", "sad", "pop"),
            Song::new("Lose Yourself", "Eminem", "motivated", "hip-hop"),
            Song::new("All of Me", "John Legend", "romantic", "R&B"),
            Song::new("Don't Stop Believin'", "Journey", "motivated", "rock"),
            Song::new("Fix You", "Coldplay", "sad", "rock"),
            Song::new("Perfect", "Ed Sheeran", "romantic", "pop"),
            Song::new("Happy Together", "The Turtles", "happy", "pop"),
            Song::new("Eye of the Tiger", "Survivor", "motivated", "rock"),
            Song::new("What a Wonderful World", "Louis Armstrong", "happy", "jazz"),
        ])
    }

    /// All songs in catalog order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Distinct moods in order of first appearance.
    pub fn moods(&self) -> Vec<&str> {
        distinct(self.songs.iter().map(|s| s.mood.as_str()))
    }

    /// Distinct genres in order of first appearance.
    pub fn genres(&self) -> Vec<&str> {
        distinct(self.songs.iter().map(|s| s.genre.as_str()))
    }

    /// Distinct artists in order of first appearance.
    pub fn artists(&self) -> Vec<&str> {
        distinct(self.songs.iter().map(|s| s.artist.as_str()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
