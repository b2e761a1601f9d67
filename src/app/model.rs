//! Application model types: `App`, `Tab`, `Picker` and `Popup`.
//!
//! Key handlers in the runtime call into `App`; `App` calls into the core
//! (`catalog`, `query`, `session`) and turns results into popups and list
//! contents the UI can render. Nothing in here touches the terminal.

use tracing::info;

use crate::catalog::Catalog;
use crate::config::{TabSetting, UiSettings};
use crate::error::ListKind;
use crate::query::{self, SongMatch};
use crate::session::Session;

/// Tabs in display order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Mood,
    Favorites,
    Search,
    Genres,
    Playlists,
    Artists,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Mood,
        Tab::Favorites,
        Tab::Search,
        Tab::Genres,
        Tab::Playlists,
        Tab::Artists,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Mood => "Mood Songs",
            Tab::Favorites => "Favorites",
            Tab::Search => "Search Songs",
            Tab::Genres => "Genres",
            Tab::Playlists => "Playlists",
            Tab::Artists => "Recommended Artists",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Whether the tab owns a free-text input (printable keys go to it).
    pub fn takes_text(self) -> bool {
        matches!(self, Tab::Favorites | Tab::Search | Tab::Playlists)
    }
}

impl From<TabSetting> for Tab {
    fn from(t: TabSetting) -> Self {
        match t {
            TabSetting::Mood => Tab::Mood,
            TabSetting::Favorites => Tab::Favorites,
            TabSetting::Search => Tab::Search,
            TabSetting::Genres => Tab::Genres,
            TabSetting::Playlists => Tab::Playlists,
            TabSetting::Artists => Tab::Artists,
        }
    }
}

/// A drop-down style menu over values taken from the catalog.
///
/// `selected` is `None` until the user picks something; that state is what the
/// menu renders as its placeholder.
#[derive(Clone, Debug)]
pub struct Picker {
    pub placeholder: &'static str,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl Picker {
    pub fn new<S: Into<String>>(
        placeholder: &'static str,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            placeholder,
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// The chosen value, if any.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Text shown on the closed menu.
    pub fn label(&self) -> &str {
        self.value().unwrap_or(self.placeholder)
    }

    /// Move to the next option. Wraps around to the first element.
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move to the previous option. Wraps around to the last element.
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

/// A modal message box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    fn notice(body: impl Into<String>) -> Self {
        Self::new("Rhythm", body)
    }
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub session: Session,

    pub tab: Tab,
    pub mood: Picker,
    pub genre: Picker,

    pub search_input: String,
    pub favorite_input: String,
    pub playlist_input: String,

    pub popup: Option<Popup>,
    pub result_separator: String,
}

impl App {
    /// Create a new `App` over `catalog` with empty session lists.
    ///
    /// The mood and genre menus offer exactly the values present in `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        let mood = Picker::new("Select your mood", catalog.moods());
        let genre = Picker::new("Select genre", catalog.genres());
        Self {
            catalog,
            session: Session::new(),
            tab: Tab::default(),
            mood,
            genre,
            search_input: String::new(),
            favorite_input: String::new(),
            playlist_input: String::new(),
            popup: None,
            result_separator: " by ".to_string(),
        }
    }

    /// Apply the `[ui]` section of the settings.
    pub fn apply_ui_settings(&mut self, ui: &UiSettings) {
        self.tab = ui.start_tab.into();
        self.result_separator = ui.result_separator.clone();
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    /// The menu belonging to the current tab, if it has one.
    pub fn picker_mut(&mut self) -> Option<&mut Picker> {
        match self.tab {
            Tab::Mood => Some(&mut self.mood),
            Tab::Genres => Some(&mut self.genre),
            _ => None,
        }
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match self.tab {
            Tab::Search => Some(&mut self.search_input),
            Tab::Favorites => Some(&mut self.favorite_input),
            Tab::Playlists => Some(&mut self.playlist_input),
            _ => None,
        }
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(input) = self.input_mut() {
            input.pop();
        }
    }

    pub fn clear_input(&mut self) {
        if let Some(input) = self.input_mut() {
            input.clear();
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    /// Run the action bound to `Enter` on the current tab.
    pub fn submit(&mut self) {
        match self.tab {
            Tab::Mood => self.recommend_by_mood(),
            Tab::Genres => self.recommend_by_genre(),
            Tab::Search => self.search(),
            Tab::Favorites => self.add_to_list(ListKind::Favorites),
            Tab::Playlists => self.add_to_list(ListKind::Playlists),
            Tab::Artists => {}
        }
    }

    fn lines(&self, matches: &[SongMatch]) -> String {
        matches
            .iter()
            .map(|m| m.joined(&self.result_separator))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Show songs for the selected mood.
    pub fn recommend_by_mood(&mut self) {
        let Some(mood) = self.mood.value().map(str::to_string) else {
            self.popup = Some(Popup::notice("Please select a valid mood."));
            return;
        };

        let matches = query::filter_by_mood(&self.catalog, &mood);
        info!(%mood, matches = matches.len(), "mood recommendation");
        let body = if matches.is_empty() {
            format!("No songs found for the mood '{mood}'.")
        } else {
            format!("Songs for your mood '{mood}':\n{}", self.lines(&matches))
        };
        self.popup = Some(Popup::new("Recommended Songs", body));
    }

    /// Show songs for the selected genre.
    pub fn recommend_by_genre(&mut self) {
        let Some(genre) = self.genre.value().map(str::to_string) else {
            self.popup = Some(Popup::notice("Please select a valid genre."));
            return;
        };

        let matches = query::filter_by_genre(&self.catalog, &genre);
        info!(%genre, matches = matches.len(), "genre recommendation");
        let body = if matches.is_empty() {
            format!("No songs found for the genre '{genre}'.")
        } else {
            format!("Songs for the genre '{genre}':\n{}", self.lines(&matches))
        };
        self.popup = Some(Popup::new("Recommended Songs by Genre", body));
    }

    /// Search titles and artists for the typed term.
    pub fn search(&mut self) {
        if self.search_input.trim().is_empty() {
            self.popup = Some(Popup::notice("Please enter a search term."));
            return;
        }

        let matches = query::search_by_text(&self.catalog, &self.search_input);
        info!(term = %self.search_input, matches = matches.len(), "search");
        let body = if matches.is_empty() {
            "No songs found.".to_string()
        } else {
            self.lines(&matches)
        };
        self.popup = Some(Popup::new("Search Results", body));
    }

    /// Append the typed text to a session list and clear the input on success.
    pub fn add_to_list(&mut self, kind: ListKind) {
        let entry = match kind {
            ListKind::Favorites => self.favorite_input.clone(),
            ListKind::Playlists => self.playlist_input.clone(),
        };

        match self.session.list_mut(kind).add(entry) {
            Ok(()) => match kind {
                ListKind::Favorites => self.favorite_input.clear(),
                ListKind::Playlists => self.playlist_input.clear(),
            },
            Err(_) => {
                let msg = match kind {
                    ListKind::Favorites => "Please enter a song title to add to favorites.",
                    ListKind::Playlists => "Please enter a playlist name.",
                };
                self.popup = Some(Popup::notice(msg));
            }
        }
    }

    /// Artists shown on the "Recommended Artists" tab, in catalog order.
    pub fn artists(&self) -> Vec<&str> {
        self.catalog.artists()
    }
}
