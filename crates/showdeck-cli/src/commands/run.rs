use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use showdeck_core::{AppConfig, Deck};
use showdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    theme::Theme,
    widgets::{CaseCardWidget, HeroWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, deck_path: Option<PathBuf>) -> Result<()> {
    let deck = match &deck_path {
        Some(path) => Deck::load(path)?,
        None => Deck::sample(),
    };
    info!(title = %deck.title, cards = deck.case_studies.len(), "playing deck");

    let app = App::new(deck, &config, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Showdeck"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, &config);

    // Restore terminal on every exit path
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    config: &AppConfig,
) -> Result<()> {
    let events = EventHandler::new(config.ui.tick_rate_ms);
    let theme = Theme::default();

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Min(10),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            HeroWidget::render(frame, chunks[0], &app, &theme);
            CaseCardWidget::render(frame, chunks[1], &app, &theme);
            StatusBarWidget::render(frame, chunks[2], &app, &theme);
        })?;

        match events.next()? {
            Some(AppEvent::Key(key)) => {
                let now = Instant::now();
                match handle_key_event(key) {
                    Action::Quit => app.quit(),
                    Action::NextCard => app.next_card(now),
                    Action::PrevCard => app.previous_card(now),
                    Action::JumpTo(index) => app.jump_to_card(index, now),
                    Action::ToggleAutoAdvance => app.toggle_auto_advance(now),
                    Action::Replay => app.replay(now),
                    Action::ToggleHints => app.toggle_hints(),
                    Action::None => {}
                }
            }
            Some(AppEvent::Tick) => app.tick(Instant::now()),
            Some(AppEvent::Resize(_, _)) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
