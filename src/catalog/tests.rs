use super::*;

#[test]
fn builtin_has_ten_songs_in_fixed_order() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 10);

    let titles: Vec<&str> = catalog.songs().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Happy",
            "Someone Like You",
            "Lose Yourself",
            "All of Me",
            "Don't Stop Believin'",
            "Fix You",
            "Perfect",
            "Happy Together",
            "Eye of the Tiger",
            "What a Wonderful World",
        ]
    );

    let last = &catalog.songs()[9];
    assert_eq!(last.artist, "Louis Armstrong");
    assert_eq!(last.mood, "happy");
    assert_eq!(last.genre, "jazz");
}

#[test]
fn songs_is_stable_across_calls() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.songs(), catalog.songs());
    assert_eq!(Catalog::builtin(), Catalog::default());
}

#[test]
fn moods_and_genres_match_the_recognized_values() {
    let catalog = Catalog::builtin();

    let mut moods = catalog.moods();
    moods.sort_unstable();
    assert_eq!(moods, vec!["happy", "motivated", "romantic", "sad"]);

    let mut genres = catalog.genres();
    genres.sort_unstable();
    assert_eq!(genres, vec!["R&B", "hip-hop", "jazz", "pop", "rock"]);
}

#[test]
fn distinct_values_keep_first_appearance_order() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.moods(), vec!["happy", "sad", "motivated", "romantic"]);
    assert_eq!(catalog.genres(), vec!["pop", "hip-hop", "R&B", "rock", "jazz"]);
    assert_eq!(catalog.artists().len(), 10);
    assert_eq!(catalog.artists()[0], "Pharrell Williams");
}

#[test]
fn duplicate_songs_are_kept_as_distinct_entries() {
    let song = Song::new("Twice", "Echo", "happy", "pop");
    let catalog = Catalog::from_songs(vec![song.clone(), song]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.artists(), vec!["Echo"]);
}
