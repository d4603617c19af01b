// Main menu rendering
use crate::app::App;
use crate::models::MenuEntry;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::io;

// Number of log lines in the activity panel
const ACTIVITY_LINES: usize = 5;

fn entry_style(entry: &MenuEntry) -> Style {
    if entry.enabled {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }
}

// Render the menu entries, the tooltip line and the activity panel
pub fn render_main_menu(f: &mut Frame<CrosstermBackend<io::Stdout>>, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(5),                              // Menu entries
                Constraint::Length(3),                           // Tooltip
                Constraint::Length(ACTIVITY_LINES as u16 + 2), // Activity
            ]
            .as_ref(),
        )
        .margin(1)
        .split(area);

    let items: Vec<ListItem> = app
        .menu
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("   {}", entry.display_label()),
                    entry_style(entry),
                )),
                Line::from(""),
            ])
        })
        .collect();

    // The highlight plays the part of a hover color, dimmer on placeholders
    let highlight_style = match app.selected_entry() {
        Some(entry) if entry.enabled => Style::default()
            .bg(Color::LightBlue)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().bg(Color::DarkGray).fg(Color::Gray),
    };

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(" Services ", Style::default().fg(Color::Yellow))),
        )
        .highlight_style(highlight_style)
        .highlight_symbol("» ");

    f.render_stateful_widget(menu, chunks[0], &mut app.menu_state);

    let tooltip = app
        .selected_entry()
        .map(|entry| entry.tooltip.clone())
        .unwrap_or_default();
    let tooltip_widget = Paragraph::new(Line::from(vec![
        Span::styled("ⓘ ", Style::default().fg(Color::Cyan)),
        Span::raw(tooltip),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(tooltip_widget, chunks[1]);

    let activity: Vec<Line> = logging::recent_logs(ACTIVITY_LINES)
        .into_iter()
        .map(|log| {
            let color = if log.contains("❌") {
                Color::Red
            } else if log.contains("⚠️") {
                Color::Yellow
            } else {
                Color::Gray
            };
            Line::from(Span::styled(log, Style::default().fg(color)))
        })
        .collect();

    let activity_widget = Paragraph::new(activity).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" Activity · {} issue(s) reported ", app.issue_count),
                Style::default().fg(Color::Yellow),
            )),
    );
    f.render_widget(activity_widget, chunks[2]);
}
