// Portal header rendering
use crate::app::WINDOW_TITLE;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::io;

// Render the header banner with the portal name
pub fn render_title_bar(f: &mut Frame<CrosstermBackend<io::Stdout>>, area: Rect) {
    let header_text = vec![
        Line::from(Span::styled(
            "Community Services Portal",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your platform for municipal services and community engagement",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let header = Paragraph::new(header_text)
        .style(Style::default().bg(Color::Blue))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightBlue))
                .title(Span::styled(
                    format!(" {} ", WINDOW_TITLE),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}
