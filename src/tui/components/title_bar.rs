//! # TitleBar Component
//!
//! Single-line header. Purely presentational:
//!
//! 1. **Before any fetch**: `"🎉 Fun Facts | uselessfacts.jsph.pl"`
//! 2. **After N attempts**: `"🎉 Fun Facts | uselessfacts.jsph.pl | fetch #N"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Name of the fact source (endpoint host)
    pub source_name: String,
    /// Fetch attempts started so far
    pub fetch_count: u64,
}

impl TitleBar {
    pub fn new(source_name: impl Into<String>, fetch_count: u64) -> Self {
        Self {
            source_name: source_name.into(),
            fetch_count,
        }
    }

    pub fn title_text(&self) -> String {
        if self.fetch_count == 0 {
            format!(" | {}", self.source_name)
        } else {
            format!(" | {} | fetch #{}", self.source_name, self.fetch_count)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("🎉 Fun Facts", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.title_text()),
        ]);
        frame.render_widget(line, area);
    }
}
