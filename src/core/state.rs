//! # Application State
//!
//! Core business state for the fact viewer. No TUI-specific types live here.
//!
//! ```text
//! App
//! ├── source: Arc<dyn FactSource>   // where facts come from
//! ├── facts: FactState
//! │   ├── text: String              // current fact, "" before first load
//! │   ├── loading: bool             // request outstanding
//! │   └── error_message: String     // "" unless the last attempt failed
//! └── fetch_count: u64              // attempts started since mount
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::facts::FactSource;

/// The only error text a user ever sees.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch fact. Try again!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactState {
    pub text: String,
    pub loading: bool,
    pub error_message: String,
}

impl FactState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trigger control accepts presses only while idle.
    pub fn trigger_enabled(&self) -> bool {
        !self.loading
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

pub struct App {
    pub source: Arc<dyn FactSource>,
    pub facts: FactState,
    pub fetch_count: u64,
}

impl App {
    pub fn new(source: Arc<dyn FactSource>) -> Self {
        Self {
            source,
            facts: FactState::new(),
            fetch_count: 0,
        }
    }
}
