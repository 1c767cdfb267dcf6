mod app;
mod clock;
mod loader;
mod views;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use cr_core::Phase;

pub use app::App;
pub use loader::DictionaryLoader;

pub fn run(mut app: App) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.poll_loader();
        app.on_clock(Instant::now());

        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app.poll_timeout(Instant::now());
        if !event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key, Instant::now());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits, Ctrl+N always restarts
    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    if ctrl && key.code == KeyCode::Char('n') {
        app.start_game(now);
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    match app.game.phase() {
        Phase::NotStarted | Phase::GameOver => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => app.start_game(now),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        },
        Phase::Playing => match key.code {
            KeyCode::Enter => app.submit(now),
            KeyCode::Esc => app.clear_input(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char('?') if app.input.is_empty() => app.toggle_help(),
            KeyCode::Char(c) if !ctrl => app.push_char(c),
            _ => {}
        },
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.game.phase() {
        Phase::NotStarted => views::title::draw(frame, app, chunks[0]),
        Phase::Playing | Phase::GameOver => views::board::draw(frame, app, chunks[0]),
    }

    views::draw_status_bar(frame, app, chunks[1]);

    if let Some(celebration) = app.overlay.current() {
        views::overlay::draw(frame, celebration);
    }

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
