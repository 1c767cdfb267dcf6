pub mod board;
pub mod overlay;
pub mod title;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use cr_core::Phase;

use super::app::App;

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut status = match app.game.phase() {
        Phase::NotStarted if app.is_loading() => {
            "Loading word dictionary... | Ctrl+C:quit".to_string()
        }
        Phase::NotStarted => "Enter:start ?:help q:quit".to_string(),
        Phase::Playing => format!(
            "Seed {} | Enter:add word Esc:clear Ctrl+N:new game ?:help Ctrl+C:quit",
            app.game.start_word()
        ),
        Phase::GameOver => format!(
            "Final score {} | Enter/n:new game q:quit",
            app.game.score()
        ),
    };
    if app.uses_fallback() && app.game.phase() != Phase::NotStarted {
        status.insert_str(0, "\u{26a0} basic word validation | ");
    }

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Enter       Start / add word"),
        Line::from("  Backspace   Delete last letter"),
        Line::from("  Esc         Clear input / close help"),
        Line::from("  Ctrl+N      New game"),
        Line::from("  ?           Toggle this help (empty input)"),
        Line::from("  q           Quit (title and game over)"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from("Scoring:"),
        Line::from("  10 points per word"),
        Line::from("  +5 for 6+ letters, +10 more for 8+"),
        Line::from("  +streak once the streak reaches 3"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
