// Help overlay rendering
use crate::utils::centered_rect;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::io;

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description.to_string()),
    ])
}

// Render the help content into `area`
pub fn render_help(f: &mut Frame<CrosstermBackend<io::Stdout>>, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            "Main menu",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        key_line("↑/↓ j/k", "Choose a service"),
        key_line("Enter", "Open the selected service"),
        key_line("?", "Toggle this help"),
        key_line("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Report form",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        key_line("Tab", "Next field (Shift+Tab goes back)"),
        key_line("Enter", "Next field, new line, or press button"),
        key_line("Ctrl+S", "Submit the report"),
        key_line("Esc", "Close the form without submitting"),
        Line::from(""),
        Line::from(Span::styled(
            "A report needs a location and a description of at least 20 characters.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Help ", Style::default().fg(Color::Yellow))),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(help_widget, area);
}

// Render help as a centered modal
pub fn render_help_overlay(f: &mut Frame<CrosstermBackend<io::Stdout>>) {
    let help_area = centered_rect(60, 18, f.size());
    f.render_widget(Clear, help_area);
    render_help(f, help_area);
}
