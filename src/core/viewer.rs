//! # FactViewer
//!
//! An explicit state object plus an observer. Every transition goes through
//! `update()` and is immediately followed by `Renderer::render(&state)`, so a
//! renderer sees exactly the sequence of states a user would see.
//!
//! Used as-is by the plain adapter. The TUI drives the same reducer from its
//! own event loop because it must keep drawing while a fetch is in flight.

use std::sync::Arc;

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, FactState};
use crate::facts::FactSource;

/// Receives the full state after every mutation.
pub trait Renderer {
    fn render(&mut self, state: &FactState);
}

pub struct FactViewer<R: Renderer> {
    app: App,
    renderer: R,
}

impl<R: Renderer> FactViewer<R> {
    /// Creates the viewer and runs its one automatic fetch to completion
    /// before returning, so no trigger can be pressed before it.
    pub async fn mount(source: Arc<dyn FactSource>, renderer: R) -> Self {
        let mut viewer = Self {
            app: App::new(source),
            renderer,
        };
        debug!("Mounting fact viewer ({})", viewer.app.source.name());
        viewer.fetch_fact().await;
        viewer
    }

    /// One complete fetch attempt. Never fails: errors end up in
    /// `state().error_message`.
    pub async fn fetch_fact(&mut self) {
        if self.dispatch(Action::Fetch) != Effect::SpawnFetch {
            return;
        }
        let action = match self.app.source.fetch().await {
            Ok(fact) => Action::FactReceived(fact),
            Err(e) => Action::FetchFailed(e),
        };
        self.dispatch(action);
    }

    /// The trigger control. Returns false without fetching while loading.
    pub async fn press_trigger(&mut self) -> bool {
        if !self.app.facts.trigger_enabled() {
            debug!("Trigger pressed while loading, ignored");
            return false;
        }
        self.fetch_fact().await;
        true
    }

    pub fn state(&self) -> &FactState {
        &self.app.facts
    }

    pub fn fetch_count(&self) -> u64 {
        self.app.fetch_count
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn dispatch(&mut self, action: Action) -> Effect {
        let effect = update(&mut self.app, action);
        self.renderer.render(&self.app.facts);
        effect
    }
}
