// Report form modal rendering
use crate::components::{Button, ProgressBar, TextField};
use crate::models::{FormField, ReportForm};
use crate::utils::centered_rect;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::io;
use validators::MIN_DESCRIPTION_CHARS;

// Render the report form as a modal centered over `area`
pub fn render_report_form(
    f: &mut Frame<CrosstermBackend<io::Stdout>>,
    form: &ReportForm,
    area: Rect,
) {
    let modal = centered_rect(72, 24, area);
    f.render_widget(Clear, modal);

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Report a Municipal Issue ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = frame.inner(modal);
    f.render_widget(frame, modal);

    let banner_height = if form.error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(banner_height), // Error banner
                Constraint::Length(1),             // Progress
                Constraint::Length(3),             // Location
                Constraint::Min(4),                // Description
                Constraint::Length(1),             // Character counter
                Constraint::Length(1),             // Buttons
            ]
            .as_ref(),
        )
        .horizontal_margin(1)
        .split(inner);

    if let Some(error) = &form.error {
        let banner = Paragraph::new(Line::from(vec![Span::styled(
            format!("⚠ {}", error),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });
        f.render_widget(banner, chunks[0]);
    }

    let progress = ProgressBar::new(form.completeness()).label("Report completeness");
    f.render_widget(progress.render(), chunks[1]);

    let location = TextField::new("Location", &form.location)
        .focused(form.focus == FormField::Location)
        .placeholder("Street, landmark or intersection");
    f.render_widget(location.render(chunks[2]), chunks[2]);

    let description_area = chunks[3];
    let description = TextField::new("Description", &form.description)
        .focused(form.focus == FormField::Description)
        .placeholder("What is the problem? Enter adds a new line");
    f.render_widget(description.render(description_area), description_area);

    let counter_color = if form.description_chars() >= MIN_DESCRIPTION_CHARS {
        Color::Green
    } else {
        Color::DarkGray
    };
    let counter = Paragraph::new(Span::styled(
        form.description_hint(),
        Style::default().fg(counter_color),
    ))
    .alignment(Alignment::Right);
    f.render_widget(counter, chunks[4]);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[5]);

    let submit = Button::new("Submit Report")
        .primary(true)
        .focused(form.focus == FormField::Submit);
    let cancel = Button::new("Cancel").focused(form.focus == FormField::Cancel);
    f.render_widget(submit.render(), button_chunks[0]);
    f.render_widget(cancel.render(), button_chunks[1]);
}
