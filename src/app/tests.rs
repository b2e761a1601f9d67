use super::*;
use crate::catalog::{Catalog, Song};
use crate::config::{TabSetting, UiSettings};

fn app() -> App {
    App::new(Catalog::builtin())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.push_input_char(c);
    }
}

#[test]
fn tabs_cycle_in_both_directions() {
    assert_eq!(Tab::Mood.next(), Tab::Favorites);
    assert_eq!(Tab::Artists.next(), Tab::Mood);
    assert_eq!(Tab::Mood.prev(), Tab::Artists);
    assert_eq!(Tab::Genres.prev(), Tab::Search);

    let mut app = app();
    assert_eq!(app.tab, Tab::default());
    assert_eq!(Tab::default(), Tab::Mood);
    for _ in 0..Tab::ALL.len() {
        app.next_tab();
    }
    assert_eq!(app.tab, Tab::Mood);
}

#[test]
fn menus_offer_exactly_the_catalog_values() {
    let app = app();
    assert_eq!(app.mood.options, app.catalog.moods());
    assert_eq!(app.genre.options, app.catalog.genres());

    let small = Catalog::from_songs(vec![
        Song::new("Blue", "Band", "mellow", "blues"),
        Song::new("Red", "Band", "angry", "metal"),
        Song::new("Navy", "Other", "mellow", "blues"),
    ]);
    let mut app = App::new(small);
    assert_eq!(app.mood.options, ["mellow", "angry"]);
    assert_eq!(app.genre.options, ["blues", "metal"]);

    app.mood.prev(); // angry
    app.recommend_by_mood();
    assert_eq!(
        app.popup.unwrap().body,
        "Songs for your mood 'angry':\nRed by Band"
    );
}

#[test]
fn picker_starts_unselected_and_wraps() {
    let mut p = Picker::new("Select your mood", ["happy", "sad"]);
    assert_eq!(p.value(), None);
    assert_eq!(p.label(), "Select your mood");

    p.next();
    assert_eq!(p.value(), Some("happy"));
    p.next();
    assert_eq!(p.value(), Some("sad"));
    p.next();
    assert_eq!(p.value(), Some("happy"));
    p.prev();
    assert_eq!(p.value(), Some("sad"));

    let mut p = Picker::new("Select genre", ["pop", "rock", "jazz"]);
    p.prev();
    assert_eq!(p.label(), "jazz");
}

#[test]
fn recommend_without_selection_asks_for_a_mood() {
    let mut app = app();
    app.submit();
    assert_eq!(
        app.popup,
        Some(Popup::new("Rhythm", "Please select a valid mood."))
    );
}

#[test]
fn recommend_by_mood_lists_matches() {
    let mut app = app();
    app.picker_mut().unwrap().next(); // happy
    app.submit();

    let popup = app.popup.clone().unwrap();
    assert_eq!(popup.title, "Recommended Songs");
    assert_eq!(
        popup.body,
        "Songs for your mood 'happy':\n\
         Happy by Pharrell Williams\n\
         Happy Together by The Turtles\n\
         What a Wonderful World by Louis Armstrong"
    );

    app.dismiss_popup();
    assert!(app.popup.is_none());
}

#[test]
fn recommend_by_mood_reports_no_matches() {
    let mut app = App::new(Catalog::from_songs(Vec::new()));
    app.mood.next();
    app.recommend_by_mood();
    assert_eq!(
        app.popup.unwrap().body,
        "No songs found for the mood 'happy'."
    );
}

#[test]
fn recommend_by_genre_uses_genre_menu() {
    let mut app = app();
    app.tab = Tab::Genres;
    app.submit();
    assert_eq!(
        app.popup.take().unwrap().body,
        "Please select a valid genre."
    );

    // pop, hip-hop, R&B, rock
    for _ in 0..4 {
        app.picker_mut().unwrap().next();
    }
    app.submit();

    let popup = app.popup.unwrap();
    assert_eq!(popup.title, "Recommended Songs by Genre");
    assert_eq!(
        popup.body,
        "Songs for the genre 'rock':\n\
         Don't Stop Believin' by Journey\n\
         Fix You by Coldplay\n\
         Eye of the Tiger by Survivor"
    );
}

#[test]
fn search_rejects_blank_terms() {
    let mut app = app();
    app.tab = Tab::Search;
    app.submit();
    assert_eq!(app.popup.take().unwrap().body, "Please enter a search term.");

    type_text(&mut app, "   ");
    app.submit();
    assert_eq!(app.popup.take().unwrap().body, "Please enter a search term.");
}

#[test]
fn search_shows_results_or_not_found() {
    let mut app = app();
    app.tab = Tab::Search;

    type_text(&mut app, "adele");
    app.submit();
    assert_eq!(
        app.popup.take().unwrap(),
        Popup::new("Search Results", "Someone Like You by Adele")
    );

    app.clear_input();
    type_text(&mut app, "love");
    app.submit();
    assert_eq!(app.popup.take().unwrap().body, "No songs found.");
}

#[test]
fn adding_favorite_clears_input_and_appends() {
    let mut app = app();
    app.tab = Tab::Favorites;
    type_text(&mut app, "Perfect by Ed Sheeran");
    app.submit();

    assert!(app.popup.is_none());
    assert_eq!(app.favorite_input, "");
    assert_eq!(app.session.favorites.all(), ["Perfect by Ed Sheeran"]);
}

#[test]
fn empty_playlist_name_is_rejected_and_input_kept() {
    let mut app = app();
    app.tab = Tab::Playlists;
    app.submit();
    assert_eq!(
        app.popup.take().unwrap().body,
        "Please enter a playlist name."
    );
    assert!(app.session.playlists.all().is_empty());

    type_text(&mut app, "  ");
    app.submit();
    assert_eq!(app.playlist_input, "  ");
    assert!(app.session.playlists.all().is_empty());

    app.clear_input();
    type_text(&mut app, "Chill");
    app.submit();
    assert_eq!(app.session.playlists.all(), ["Chill"]);
}

#[test]
fn text_keys_only_reach_text_tabs() {
    let mut app = app();
    app.push_input_char('x');
    assert!(app.search_input.is_empty());
    assert!(app.favorite_input.is_empty());
    assert!(app.playlist_input.is_empty());

    app.tab = Tab::Favorites;
    type_text(&mut app, "ab");
    app.pop_input_char();
    assert_eq!(app.favorite_input, "a");
    assert!(app.search_input.is_empty());
    assert!(Tab::Favorites.takes_text());
    assert!(!Tab::Artists.takes_text());
}

#[test]
fn ui_settings_pick_start_tab_and_separator() {
    let mut app = app();
    let ui = UiSettings {
        start_tab: TabSetting::Artists,
        result_separator: " - ".to_string(),
        ..UiSettings::default()
    };
    app.apply_ui_settings(&ui);
    assert_eq!(app.tab, Tab::Artists);

    app.tab = Tab::Search;
    type_text(&mut app, "perfect");
    app.submit();
    assert_eq!(app.popup.unwrap().body, "Perfect - Ed Sheeran");
}

#[test]
fn artists_tab_lists_catalog_artists() {
    let app = app();
    let artists = app.artists();
    assert_eq!(artists.len(), 10);
    assert_eq!(artists[1], "Adele");
    assert_eq!(artists[9], "Louis Armstrong");
}
