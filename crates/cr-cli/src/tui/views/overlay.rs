use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use cr_core::{Celebration, CelebrationKind};

use super::centered_rect;

/// Draw the celebration banner over everything else.
pub fn draw(frame: &mut Frame, celebration: &Celebration) {
    let area = centered_rect(60, 20, frame.area());

    let color = match celebration.kind {
        CelebrationKind::Milestone => Color::Yellow,
        CelebrationKind::LongWord => Color::Magenta,
        CelebrationKind::Streak => Color::Red,
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            celebration.to_string(),
            Style::default().fg(color).bold(),
        )),
    ];

    let banner = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(banner, area);
}
