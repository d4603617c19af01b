// UI models for civic-portal
use models::ReportInput;
use validators::{report_completeness, MIN_DESCRIPTION_CHARS};

/// What happens when a menu entry is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ReportIssue,
}

/// One entry of the main menu.
///
/// Entries are plain data so a placeholder becomes a working feature by
/// flipping `enabled` and giving it an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub enabled: bool,
    pub tooltip: String,
    pub action: Option<MenuAction>,
}

impl MenuEntry {
    pub fn new(label: &str, tooltip: &str, action: MenuAction) -> Self {
        MenuEntry {
            label: label.to_string(),
            enabled: true,
            tooltip: tooltip.to_string(),
            action: Some(action),
        }
    }

    /// A disabled placeholder for a feature that does not exist yet
    pub fn coming_soon(label: &str, tooltip: &str) -> Self {
        MenuEntry {
            label: label.to_string(),
            enabled: false,
            tooltip: tooltip.to_string(),
            action: None,
        }
    }

    pub fn display_label(&self) -> String {
        if self.enabled {
            self.label.clone()
        } else {
            format!("{} \u{26A0}", self.label)
        }
    }

    /// The action to run, if the entry can be activated at all
    pub fn active_action(&self) -> Option<MenuAction> {
        if self.enabled {
            self.action
        } else {
            None
        }
    }
}

/// Entries shown on the main menu, top to bottom
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            "Report Municipal Issues",
            "Submit reports about infrastructure problems, sanitation issues, or other municipal concerns",
            MenuAction::ReportIssue,
        ),
        MenuEntry::coming_soon(
            "Community Events",
            "View and participate in local community events (Coming Soon)",
        ),
        MenuEntry::coming_soon(
            "Service Tracking",
            "Track status of your service requests (Coming Soon)",
        ),
    ]
}

/// Focusable parts of the report form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Location,
    Description,
    Submit,
    Cancel,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Location => FormField::Description,
            FormField::Description => FormField::Submit,
            FormField::Submit => FormField::Cancel,
            FormField::Cancel => FormField::Location,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Location => FormField::Cancel,
            FormField::Description => FormField::Location,
            FormField::Submit => FormField::Description,
            FormField::Cancel => FormField::Submit,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Location | FormField::Description)
    }
}

/// Contents of the report form while it is open
#[derive(Debug, Clone)]
pub struct ReportForm {
    pub location: String,
    pub description: String,
    pub focus: FormField,
    pub error: Option<String>, // Inline banner from the last failed submit
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportForm {
    pub fn new() -> Self {
        ReportForm {
            location: String::new(),
            description: String::new(),
            focus: FormField::Location,
            error: None,
        }
    }

    pub fn to_input(&self) -> ReportInput {
        ReportInput::new(self.location.clone(), self.description.clone())
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Location => Some(&mut self.location),
            FormField::Description => Some(&mut self.description),
            FormField::Submit | FormField::Cancel => None,
        }
    }

    // Typing into a field dismisses the error banner
    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            if text.pop().is_some() {
                self.error = None;
            }
        }
    }

    /// Line break in the description; the location is a single line
    pub fn newline(&mut self) {
        if self.focus == FormField::Description {
            self.description.push('\n');
            self.error = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn description_chars(&self) -> usize {
        self.description.chars().count()
    }

    pub fn completeness(&self) -> f64 {
        report_completeness(&self.location, &self.description)
    }

    /// Character counter shown under the description
    pub fn description_hint(&self) -> String {
        let count = self.description_chars();
        if count < MIN_DESCRIPTION_CHARS {
            format!("{}/{} characters", count, MIN_DESCRIPTION_CHARS)
        } else {
            format!("{} characters", count)
        }
    }
}
