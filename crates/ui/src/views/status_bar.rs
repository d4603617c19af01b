// Status bar rendering
use crate::app::App;
use crate::models::FormField;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::io;

// Render the status bar
pub fn render_status_bar(f: &mut Frame<CrosstermBackend<io::Stdout>>, app: &App, area: Rect) {
    // A pending status message replaces the key hints
    if let Some(message) = &app.status_message {
        let is_success = message.starts_with("✅");

        let status_message = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(if is_success { Color::Green } else { Color::Blue })
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);

        f.render_widget(status_message, area);
        return;
    }

    let mut status_items = vec![Span::styled(
        if app.is_form_open() {
            " New Report "
        } else {
            " Main Menu "
        },
        Style::default().bg(Color::Blue).fg(Color::White),
    )];

    let help_text = match &app.form {
        Some(form) => match form.focus {
            FormField::Location => "[Tab] Next field   [Enter] Description   [Ctrl+S] Submit   [Esc] Cancel",
            FormField::Description => "[Tab] Next field   [Enter] New line   [Ctrl+S] Submit   [Esc] Cancel",
            FormField::Submit | FormField::Cancel => {
                "[←/→] Switch button   [Enter] Press   [Tab] Next field   [Esc] Cancel"
            }
        },
        None => "[↑/↓] Choose service   [Enter] Open   [?] Help   [q] Quit",
    };

    status_items.push(Span::raw(" "));
    status_items.push(Span::styled(
        format!(" {} ", help_text),
        Style::default().fg(Color::White),
    ));

    let status_bar = Paragraph::new(Line::from(status_items))
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
