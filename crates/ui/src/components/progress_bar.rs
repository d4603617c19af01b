// Progress bar component
use ratatui::{
    style::{Color, Style},
    widgets::Gauge,
};

/// Shows how complete the report form is
pub struct ProgressBar {
    pub progress: f64,
    pub label: Option<String>,
}

impl ProgressBar {
    pub fn new(progress: f64) -> Self {
        ProgressBar {
            progress: progress.clamp(0.0, 1.0),
            label: None,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    // Green once the report is ready to go
    fn color(&self) -> Color {
        if self.progress >= 1.0 {
            Color::Green
        } else {
            Color::Yellow
        }
    }

    pub fn render(&self) -> Gauge {
        let label = match &self.label {
            Some(lbl) => format!("{} {:.0}%", lbl, self.progress * 100.0),
            None => format!("{:.0}%", self.progress * 100.0),
        };

        Gauge::default()
            .gauge_style(Style::default().fg(self.color()).bg(Color::Black))
            .label(label)
            .ratio(self.progress)
    }
}
