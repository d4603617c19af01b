// Button component
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// A push button on the report form
pub struct Button {
    pub label: String,
    pub is_focused: bool,
    pub is_primary: bool,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Button {
            label: label.to_string(),
            is_focused: false,
            is_primary: false,
        }
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    /// Primary buttons use the green action color
    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub fn render(&self) -> Paragraph {
        let (fg, bg) = match (self.is_focused, self.is_primary) {
            (true, _) => (Color::Black, Color::LightCyan),
            (false, true) => (Color::White, Color::Green),
            (false, false) => (Color::White, Color::Blue),
        };

        let style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(vec![Span::styled(
            format!("  {}  ", self.label),
            style,
        )]))
        .alignment(Alignment::Center)
    }
}
