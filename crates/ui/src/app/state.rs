// App state for the UI
use crate::handlers::report::submit_report;
use crate::models::{default_menu, FormField, MenuAction, MenuEntry, ReportForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use repository::IssueRepository;
use std::time::{Duration, Instant};

// How long a status bar message stays up
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Application state
pub struct App {
    pub menu: Vec<MenuEntry>,
    pub menu_state: ListState,
    pub form: Option<ReportForm>, // Open report form, drawn as a modal
    pub show_help: bool,
    pub repository: Box<dyn IssueRepository>,
    pub issue_count: usize,
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(repository: Box<dyn IssueRepository>) -> App {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        let mut app = App {
            menu: default_menu(),
            menu_state,
            form: None,
            show_help: false,
            repository,
            issue_count: 0,
            status_message: None,
            status_message_time: None,
        };

        match app.repository.list() {
            Ok(issues) => app.issue_count = issues.len(),
            Err(e) => {
                logging::warning(&format!("Could not read existing issues: {}", e));
                app.set_status_message(format!("Issue store unavailable: {}", e));
            }
        }

        app
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.menu_state.selected().and_then(|idx| self.menu.get(idx))
    }

    // Move the menu selection up, wrapping to the bottom
    pub fn previous_entry(&mut self) {
        if self.menu.is_empty() {
            return;
        }

        let i = match self.menu_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.menu.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    // Move the menu selection down, wrapping to the top
    pub fn next_entry(&mut self) {
        if self.menu.is_empty() {
            return;
        }

        let i = match self.menu_state.selected() {
            Some(i) => {
                if i >= self.menu.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    /// Run the selected entry's action. Disabled entries only explain
    /// themselves in the status bar.
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        match entry.active_action() {
            Some(action) => self.run_action(action),
            None => {
                let message = format!("{} is coming soon", entry.label);
                logging::debug(&format!("Ignored disabled menu entry '{}'", entry.label));
                self.set_status_message(message);
            }
        }
    }

    pub fn run_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::ReportIssue => self.open_report_form(),
        }
    }

    pub fn open_report_form(&mut self) {
        self.form = Some(ReportForm::new());
        self.show_help = false;
        logging::debug("Opened report form");
    }

    pub fn close_report_form(&mut self) {
        if self.form.take().is_some() {
            logging::debug("Closed report form without submitting");
        }
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Route a key press to the open report form
    pub fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.close_report_form(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form()
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Left | KeyCode::Right if !form.focus.is_text() => {
                form.focus = if form.focus == FormField::Submit {
                    FormField::Cancel
                } else {
                    FormField::Submit
                };
            }
            KeyCode::Enter => match form.focus {
                FormField::Location => form.focus_next(),
                FormField::Description => form.newline(),
                FormField::Submit => self.submit_form(),
                FormField::Cancel => self.close_report_form(),
            },
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }

    /// Validate the form and store the report.
    ///
    /// On success the form closes and the status bar confirms the new issue.
    /// On failure the form stays open with the message in its error banner.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let input = form.to_input();

        match submit_report(&mut *self.repository, input) {
            Ok(id) => {
                self.form = None;
                self.issue_count += 1;
                self.set_status_message(format!(
                    "✅ Issue {} submitted. Thank you!",
                    id.short()
                ));
            }
            Err(e) => {
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // Set a temporary status message to be displayed in the UI
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    // Drop the status message once it has been up long enough
    pub fn tick(&mut self) {
        if let Some(message_time) = self.status_message_time {
            if message_time.elapsed() >= STATUS_MESSAGE_TTL {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}
