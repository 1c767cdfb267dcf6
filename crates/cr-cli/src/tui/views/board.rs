use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use cr_core::scoring::{WordTier, streak_banner};

use crate::tui::app::App;

const LOW_TIME: u32 = 10;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Min(5),    // Chain
            Constraint::Length(3), // Input
            Constraint::Length(3), // Feedback
            Constraint::Length(1), // Streak
        ])
        .split(area);

    draw_stats(frame, app, chunks[0]);
    draw_chain(frame, app, chunks[1]);
    draw_input(frame, app, chunks[2]);
    draw_feedback(frame, app, chunks[3]);

    if app.game.is_playing()
        && let Some(banner) = streak_banner(app.game.streak())
    {
        let streak = Paragraph::new(Span::styled(
            banner,
            Style::default().fg(Color::LightRed).bold(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(streak, chunks[4]);
    }
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let score_style = if app.score_highlighted() {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let score = Paragraph::new(Line::from(vec![
        Span::styled(app.game.score().to_string(), score_style),
        Span::raw("  "),
        Span::styled(
            app.game.rating().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(Block::default().title(" Score ").borders(Borders::ALL));
    frame.render_widget(score, cols[0]);

    let time_style = if app.game.time_left() <= LOW_TIME {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let time = Paragraph::new(Span::styled(format!("{}s", app.game.time_left()), time_style))
        .block(Block::default().title(" Time ").borders(Borders::ALL));
    frame.render_widget(time, cols[1]);

    let chain = Paragraph::new(app.game.chain().len().to_string())
        .style(Style::default().bold())
        .block(Block::default().title(" Chain Length ").borders(Borders::ALL));
    frame.render_widget(chain, cols[2]);
}

fn draw_chain(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, word) in app.game.chain().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2192} ", Style::default().fg(Color::DarkGray)));
        }
        let tier = WordTier::of(i, word);
        let style = match tier {
            WordTier::Seed => Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
            WordTier::Plain => Style::default().fg(Color::White),
            WordTier::Long => Style::default().fg(Color::LightBlue).bold(),
            WordTier::Epic => Style::default().fg(Color::Magenta).bold(),
        };
        spans.push(Span::styled(format!("{word}{}", tier.marker()), style));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(seed) = app.game.seed() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Hint: {}", seed.hint),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Your Chain ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.game.is_playing() {
        let last = app.game.chain().last().map(String::as_str).unwrap_or("");
        if app.input.is_empty() {
            (
                format!("Enter a word connected to \"{last}\"..."),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (format!("{}_", app.input), Style::default().fg(Color::White))
        }
    } else {
        (
            "Press Enter to play again".to_string(),
            Style::default().fg(Color::Green),
        )
    };

    let input = Paragraph::new(Span::styled(text, style))
        .block(Block::default().title(" Next Word ").borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let Some(feedback) = &app.feedback else {
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let color = if app.game.is_game_over() || feedback.is_rejection() {
        Color::Red
    } else {
        Color::Green
    };

    let paragraph = Paragraph::new(feedback.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
