use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::commands::{FALLBACK_NOTICE, FULL_DICTIONARY_HINT};
use crate::tui::app::App;

const RULES: [&str; 6] = [
    "Build a chain of connected words starting from the given word",
    "Each word must relate to the previous word somehow",
    "Words must be at least 3 letters long and valid English words",
    "No repeating words or using the start word again",
    "Build the longest chain you can before the clock runs out!",
    "Longer words and streaks give bonus points",
];

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" \u{26d3} Chain Reaction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    if app.is_loading() {
        lines.push(Line::from(Span::styled(
            "Loading word dictionary...",
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
    } else if app.uses_fallback() {
        lines.push(Line::from(Span::styled(
            format!("\u{26a0} {FALLBACK_NOTICE}"),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {FULL_DICTIONARY_HINT}"),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from("How to Play:").style(Style::default().bold()));
    lines.push(Line::from(""));
    for rule in RULES {
        lines.push(Line::from(format!("  \u{2022} {rule}")));
    }
    lines.push(Line::from(format!(
        "  \u{2022} You have {} seconds per round",
        app.config.round_seconds
    )));
    lines.push(Line::from(""));

    let prompt = if app.is_loading() {
        Span::styled("Loading...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            "Press Enter to start playing!",
            Style::default().fg(Color::Green).bold(),
        )
    };
    lines.push(Line::from(prompt));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
