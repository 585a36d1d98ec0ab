//! # TriggerButton Component
//!
//! The single interactive control. Shows `"Get Another Fact"` when idle and
//! a dimmed `"Loading..."` while a fetch is outstanding.
//!
//! ## Disabled state
//!
//! `enabled` is a prop synced from `FactState::trigger_enabled()`. While it is
//! false the button swallows key presses and clicks. This is the only guard
//! against overlapping requests from user action.
//!
//! ## Hit testing
//!
//! The rectangle from the last render is kept so a `MouseClick` can be
//! matched against it. Before the first render no click can hit.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::view::TRIGGER_LABEL;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

pub struct TriggerButton {
    pub label: &'static str,
    pub enabled: bool,
    area: Option<Rect>,
}

impl TriggerButton {
    pub fn new() -> Self {
        Self {
            label: TRIGGER_LABEL,
            enabled: true,
            area: None,
        }
    }

    /// Screen area from the last render.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    fn hit(&self, col: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(col, row)))
    }
}

impl Default for TriggerButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TriggerButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Borders plus two spaces of padding each side
        let width = (TRIGGER_LABEL.len() as u16 + 6).min(area.width);
        let [button_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);

        let style = if self.enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let button = Paragraph::new(self.label)
            .centered()
            .style(style)
            .block(Block::bordered().border_style(style));

        frame.render_widget(button, button_area);
        self.area = Some(button_area);
    }
}

impl EventHandler for TriggerButton {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ButtonEvent> {
        let pressed = match *event {
            TuiEvent::Trigger => true,
            TuiEvent::MouseClick(col, row) => self.hit(col, row),
            _ => false,
        };
        if !pressed {
            return None;
        }
        if !self.enabled {
            log::debug!("Trigger pressed while disabled, ignored");
            return None;
        }
        Some(ButtonEvent::Pressed)
    }
}
