//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Picker, Tab};
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("tab/S-tab", "switch tab");
    map.insert("j/k", "pick");
    map.insert("enter", "run / add");
    map.insert("esc", "clear input");
    map.insert("backspace", "delete char");
    map.insert("q", "quit");
    map.insert("C-c", "quit");
    map
});

/// Render the controls help text relevant to `tab`.
fn controls_text(tab: Tab) -> String {
    let order: &[&str] = match tab {
        Tab::Mood | Tab::Genres => &["tab/S-tab", "j/k", "enter", "q"],
        Tab::Search | Tab::Favorites | Tab::Playlists => {
            &["tab/S-tab", "enter", "backspace", "esc", "C-c"]
        }
        Tab::Artists => &["tab/S-tab", "q"],
    };
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
///
/// The 10x5 floor never pushes the result outside `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(5).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn draw_picker(frame: &mut Frame, area: Rect, prompt: &str, picker: &Picker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let label = Paragraph::new(format!("{prompt} {}", picker.label())).block(padded(" choice "));
    frame.render_widget(label, chunks[0]);

    let items: Vec<ListItem> = picker.options.iter().map(|o| ListItem::new(o.as_str())).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" options "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(picker.selected);
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_text_tab(
    frame: &mut Frame,
    area: Rect,
    input_title: &str,
    input: &str,
    entries: Option<(&str, &[String])>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input_par = Paragraph::new(format!("{input}_")).block(padded(input_title));
    frame.render_widget(input_par, chunks[0]);

    if let Some((title, entries)) = entries {
        let items: Vec<ListItem> = entries.iter().map(|e| ListItem::new(e.as_str())).collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, chunks[1]);
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rhythm ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, chunks[1]);

    let body = chunks[2];
    match app.tab {
        Tab::Mood => draw_picker(frame, body, "Select your mood:", &app.mood),
        Tab::Genres => draw_picker(frame, body, "Select a Genre:", &app.genre),
        Tab::Search => draw_text_tab(frame, body, " search songs ", &app.search_input, None),
        Tab::Favorites => draw_text_tab(
            frame,
            body,
            " add to favorites ",
            &app.favorite_input,
            Some((" favorite songs ", app.session.favorites.all())),
        ),
        Tab::Playlists => draw_text_tab(
            frame,
            body,
            " create a playlist ",
            &app.playlist_input,
            Some((" playlists ", app.session.playlists.all())),
        ),
        Tab::Artists => {
            let items: Vec<ListItem> = app.artists().into_iter().map(ListItem::new).collect();
            let list = List::new(items).block(padded(" recommended artists "));
            frame.render_widget(list, body);
        }
    }

    let footer = Paragraph::new(controls_text(app.tab))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    // Popup goes last so it sits above every other widget.
    if let Some(popup) = &app.popup {
        let popup_area = popup_rect(&popup.title, &popup.body, frame.area());
        frame.render_widget(Clear, popup_area);

        let par = Paragraph::new(popup.body.as_str())
            .block(padded(popup.title.as_str()).title_bottom(" enter/esc closes "))
            .wrap(Wrap { trim: true });
        frame.render_widget(par, popup_area);
    }
}

/// Size a popup to its text, centered in `area`.
fn popup_rect(title: &str, body: &str, area: Rect) -> Rect {
    let lines = body.lines().count().min(u16::MAX as usize) as u16;
    let widest = body
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count() + 4)
        .min(u16::MAX as usize - 4) as u16;
    centered_rect_sized(widest + 4, lines.saturating_add(3), area)
}
