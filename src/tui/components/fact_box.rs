//! # FactBox Component
//!
//! Bordered box showing the view lines for the current state, centered
//! vertically. The loading line carries a braille spinner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::FactState;
use crate::core::view::{LOADING_LABEL, ViewLine, view_lines};
use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct FactBox<'a> {
    state: &'a FactState,
    spinner_frame: usize,
}

impl<'a> FactBox<'a> {
    pub fn new(state: &'a FactState, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, view_line) in view_lines(self.state).into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(match view_line {
                ViewLine::Loading => Line::from(vec![
                    Span::styled(
                        SPINNER[self.spinner_frame % SPINNER.len()],
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(" "),
                    Span::styled(LOADING_LABEL, Style::default().fg(Color::Yellow)),
                ]),
                ViewLine::Error(msg) => Line::from(Span::styled(
                    msg,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                ViewLine::Fact(text) => Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::Green),
                )),
            });
        }
        lines
    }
}

impl Component for FactBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().add_modifier(Modifier::DIM))
            .title_bottom(Line::from(" Enter: another fact · q: quit ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(self.lines())
            .centered()
            .wrap(Wrap { trim: true });

        let height = paragraph.line_count(inner.width).min(inner.height as usize) as u16;
        let [content_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(inner);

        frame.render_widget(paragraph, content_area);
    }
}
