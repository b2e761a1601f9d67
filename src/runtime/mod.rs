use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::catalog::Catalog;

mod event_loop;
mod logging;
mod settings;

use settings::LoadedSettings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let LoadedSettings {
        settings,
        source,
        fallback_reason,
    } = settings::load_settings();
    if let Some(reason) = &fallback_reason {
        eprintln!("rhythm: {reason}; using defaults");
    }

    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("rhythm: logging disabled: {e}");
    }
    if let Some(reason) = &fallback_reason {
        warn!(%reason, "using default settings");
    }

    let catalog = Catalog::builtin();
    info!(songs = catalog.len(), config = %source, "catalog loaded");

    let mut app = App::new(catalog);
    app.apply_ui_settings(&settings.ui);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        favorites = app.session.favorites.len(),
        playlists = app.session.playlists.len(),
        "session ended"
    );
    run_result
}
