use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the UI and dispatches key presses to `app`.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Returns `true` when the app should quit.
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // An open popup captures every key until dismissed.
    if app.popup.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_popup();
        }
        return false;
    }

    match key.code {
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Enter => app.submit(),
        _ if app.tab.takes_text() => match key.code {
            KeyCode::Esc => app.clear_input(),
            KeyCode::Backspace => app.pop_input_char(),
            KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
            _ => {}
        },
        KeyCode::Char('q') => return true,
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(p) = app.picker_mut() {
                p.next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(p) = app.picker_mut() {
                p.prev();
            }
        }
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::catalog::Catalog;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    #[test]
    fn q_quits_only_outside_text_tabs() {
        let mut app = App::new(Catalog::builtin());
        assert!(press(&mut app, KeyCode::Char('q')));

        app.tab = Tab::Search;
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::new(Catalog::builtin());
        app.tab = Tab::Favorites;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(key, &mut app));
    }

    #[test]
    fn mood_flow_through_keys() {
        let mut app = App::new(Catalog::builtin());
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_some());

        // Keys other than enter/esc are swallowed by the popup.
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.mood.value(), None);
        press(&mut app, KeyCode::Esc);
        assert!(app.popup.is_none());

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.mood.value(), Some("sad"));
        press(&mut app, KeyCode::Enter);
        let body = app.popup.clone().unwrap().body;
        assert!(body.starts_with("Songs for your mood 'sad':"));
        assert!(body.contains("Fix You by Coldplay"));
    }

    #[test]
    fn typing_then_enter_adds_playlist() {
        let mut app = App::new(Catalog::builtin());
        press(&mut app, KeyCode::BackTab); // artists
        press(&mut app, KeyCode::Left); // playlists
        assert_eq!(app.tab, Tab::Playlists);

        for c in "Late night".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.playlists.all(), ["Late nigh"]);
        assert_eq!(app.playlist_input, "");
    }

    #[test]
    fn esc_clears_text_input() {
        let mut app = App::new(Catalog::builtin());
        app.tab = Tab::Search;
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(app.search_input.is_empty());
    }
}
