// Text field component
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// A labelled input box. The focused field gets a light background and a
/// block cursor at the end of its text.
pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_focused: bool,
    pub placeholder: Option<&'a str>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        TextField {
            label,
            value,
            is_focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text to draw, cursor included
    pub fn display_text(&self) -> String {
        match (self.value.is_empty(), self.is_focused, self.placeholder) {
            (true, false, Some(placeholder)) => placeholder.to_string(),
            (_, true, _) => format!("{}█", self.value),
            _ => self.value.to_string(),
        }
    }

    /// Break the text into rows of at most `width` characters. Long lines
    /// wrap mid-word so the row count, and with it the scroll offset, is exact.
    pub fn wrapped_rows(&self, width: u16) -> Vec<String> {
        let width = usize::from(width.max(1));
        let mut rows = Vec::new();

        for line in self.display_text().split('\n') {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                rows.push(String::new());
                continue;
            }
            rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }

        rows
    }

    /// Render for `area`, scrolled so the last rows (and the cursor) show
    pub fn render(&self, area: Rect) -> Paragraph<'a> {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);

        let rows = self.wrapped_rows(inner_width);
        let row_count = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let scroll = row_count.saturating_sub(inner_height);
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();

        let (text_style, border_style) = if self.is_focused {
            (
                Style::default().fg(Color::Black).bg(Color::LightYellow),
                Style::default().fg(Color::Yellow),
            )
        } else if self.value.is_empty() {
            (
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::Gray),
            )
        };

        Paragraph::new(lines)
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(Span::styled(
                        format!(" {} ", self.label),
                        border_style.add_modifier(Modifier::BOLD),
                    )),
            )
            .scroll((scroll, 0))
    }
}
