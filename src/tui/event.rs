use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    /// Keyboard press of the trigger control (Enter, Space, `n`).
    Trigger,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => translate(ev),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) | (_, KeyCode::Char('n')) => {
            Some(TuiEvent::Trigger)
        }
        _ => None,
    }
}
