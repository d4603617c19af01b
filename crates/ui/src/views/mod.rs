// UI Views module
mod help_overlay;
mod main_menu;
mod report_form;
mod status_bar;
mod title_bar;

use crate::app::App;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame,
};
use std::io;

// Main render function for the UI
pub fn render_ui(f: &mut Frame<CrosstermBackend<io::Stdout>>, app: &mut App) {
    let size = f.size();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5), // Portal header
                Constraint::Min(8),    // Menu and activity
                Constraint::Length(1), // Status bar
            ]
            .as_ref(),
        )
        .split(size);

    title_bar::render_title_bar(f, main_chunks[0]);
    main_menu::render_main_menu(f, app, main_chunks[1]);
    status_bar::render_status_bar(f, app, main_chunks[2]);

    // Modals are drawn last so they sit on top of the menu
    if let Some(form) = &app.form {
        report_form::render_report_form(f, form, size);
    } else if app.show_help {
        help_overlay::render_help_overlay(f);
    }
}
