//! # View
//!
//! Backend-independent description of what the fact box shows.
//! Adapters turn these lines into ratatui widgets or plain text.
//!
//! Display order is fixed: loading indicator, then error, then fact.
//! The three are not exclusive: a stale fact stays visible under a fresh error.

use crate::core::state::FactState;

pub const LOADING_LABEL: &str = "Loading...";
pub const TRIGGER_LABEL: &str = "Get Another Fact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLine<'a> {
    Loading,
    Error(&'a str),
    Fact(&'a str),
}

pub fn view_lines(state: &FactState) -> Vec<ViewLine<'_>> {
    let mut lines = Vec::with_capacity(3);
    if state.loading {
        lines.push(ViewLine::Loading);
    }
    if !state.error_message.is_empty() {
        lines.push(ViewLine::Error(&state.error_message));
    }
    if !state.text.is_empty() {
        lines.push(ViewLine::Fact(&state.text));
    }
    lines
}

/// Label on the trigger control.
pub fn trigger_label(state: &FactState) -> &'static str {
    if state.loading {
        LOADING_LABEL
    } else {
        TRIGGER_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, loading: bool, error_message: &str) -> FactState {
        FactState {
            text: text.to_string(),
            loading,
            error_message: error_message.to_string(),
        }
    }

    #[test]
    fn test_empty_state_shows_nothing() {
        assert!(view_lines(&FactState::new()).is_empty());
    }

    #[test]
    fn test_loading_only() {
        assert_eq!(view_lines(&state("", true, "")), vec![ViewLine::Loading]);
    }

    #[test]
    fn test_stale_fact_with_error() {
        let s = state("Old fact", false, "Failed to fetch fact. Try again!");
        assert_eq!(
            view_lines(&s),
            vec![
                ViewLine::Error("Failed to fetch fact. Try again!"),
                ViewLine::Fact("Old fact"),
            ]
        );
    }

    #[test]
    fn test_loading_over_stale_fact() {
        let s = state("Old fact", true, "");
        assert_eq!(
            view_lines(&s),
            vec![ViewLine::Loading, ViewLine::Fact("Old fact")]
        );
    }

    #[test]
    fn test_trigger_label() {
        assert_eq!(trigger_label(&state("", true, "")), "Loading...");
        assert_eq!(trigger_label(&state("x", false, "")), "Get Another Fact");
    }
}
