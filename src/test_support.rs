//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::state::{App, FactState};
use crate::core::viewer::Renderer;
use crate::facts::{Fact, FactSource, FetchError};

/// A source that replays scripted results in order.
/// Once the script runs out every call fails with a network error.
pub struct StubSource {
    script: Mutex<VecDeque<Result<Fact, FetchError>>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(script: Vec<Result<Fact, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self) -> Result<Fact, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".to_string())))
    }
}

/// Keeps a copy of every state it is asked to render.
#[derive(Default)]
pub struct RecordingRenderer {
    pub states: Vec<FactState>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, state: &FactState) {
        self.states.push(state.clone());
    }
}

/// Creates a test App with an empty StubSource.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::new(Vec::new())))
}
