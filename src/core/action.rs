//! # Actions
//!
//! Everything that can happen to the fact viewer becomes an `Action`.
//! User presses the button? That's `Action::Fetch`.
//! The service answers? That's `Action::FactReceived(fact)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform next. No I/O happens here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! An attempt always walks the same path:
//!
//! ```text
//! Fetch ──► loading=true, error=""  ──► SpawnFetch
//!              │
//!              ├── FactReceived(f) ──► text=f.text, loading=false
//!              └── FetchFailed(e)  ──► error=FETCH_FAILED_MESSAGE, loading=false
//! ```

use log::{debug, error, info};

use crate::core::state::{App, FETCH_FAILED_MESSAGE};
use crate::facts::{Fact, FetchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a new fetch attempt.
    Fetch,
    /// The attempt succeeded.
    FactReceived(Fact),
    /// The attempt failed for any reason.
    FetchFailed(FetchError),
    Quit,
}

/// Side effect requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `FactSource::fetch` and feed its result back as an action.
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Fetch => {
            // Not guarded on `loading`: the trigger control does that.
            app.facts.error_message.clear();
            app.facts.loading = true;
            app.fetch_count += 1;
            info!(
                "Fetch attempt #{} from {}",
                app.fetch_count,
                app.source.name()
            );
            Effect::SpawnFetch
        }
        Action::FactReceived(fact) => {
            app.facts.text = fact.into_text();
            app.facts.loading = false;
            debug!("Fact received ({} chars)", app.facts.text.len());
            Effect::None
        }
        Action::FetchFailed(err) => {
            error!("Fetch attempt #{} failed: {}", app.fetch_count, err);
            app.facts.error_message = FETCH_FAILED_MESSAGE.to_string();
            app.facts.loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_fetch_sets_loading_and_clears_error() {
        let mut app = test_app();
        app.facts.error_message = FETCH_FAILED_MESSAGE.to_string();

        let effect = update(&mut app, Action::Fetch);

        assert_eq!(effect, Effect::SpawnFetch);
        assert!(app.facts.loading);
        assert!(app.facts.error_message.is_empty());
        assert_eq!(app.fetch_count, 1);
    }

    #[test]
    fn test_fetch_keeps_previous_text() {
        let mut app = test_app();
        app.facts.text = "Old fact".to_string();
        update(&mut app, Action::Fetch);
        assert_eq!(app.facts.text, "Old fact");
    }

    #[test]
    fn test_fact_received_sets_text() {
        let mut app = test_app();
        update(&mut app, Action::Fetch);

        let effect = update(
            &mut app,
            Action::FactReceived(Fact::new("Cats sleep 70% of their lives.")),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.facts.text, "Cats sleep 70% of their lives.");
        assert!(!app.facts.loading);
        assert!(app.facts.error_message.is_empty());
    }

    #[test]
    fn test_fact_without_text_clears_display() {
        let mut app = test_app();
        app.facts.text = "Old fact".to_string();
        update(&mut app, Action::Fetch);
        update(&mut app, Action::FactReceived(Fact::default()));
        assert_eq!(app.facts.text, "");
        assert!(!app.facts.has_error());
    }

    #[test]
    fn test_fetch_failed_keeps_text_and_sets_message() {
        let mut app = test_app();
        app.facts.text = "Old fact".to_string();
        update(&mut app, Action::Fetch);

        let effect = update(
            &mut app,
            Action::FetchFailed(FetchError::Network("connection refused".to_string())),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.facts.text, "Old fact");
        assert_eq!(app.facts.error_message, "Failed to fetch fact. Try again!");
        assert!(!app.facts.loading);
    }

    #[test]
    fn test_parse_failure_uses_same_message() {
        let mut app = test_app();
        update(&mut app, Action::Fetch);
        update(
            &mut app,
            Action::FetchFailed(FetchError::Parse("expected value".to_string())),
        );
        assert_eq!(app.facts.error_message, FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_retry_clears_error_before_result() {
        let mut app = test_app();
        update(&mut app, Action::Fetch);
        update(
            &mut app,
            Action::FetchFailed(FetchError::Network("timeout".to_string())),
        );
        assert!(app.facts.has_error());

        update(&mut app, Action::Fetch);

        assert!(!app.facts.has_error());
        assert!(app.facts.loading);
        assert_eq!(app.fetch_count, 2);
    }

    #[test]
    fn test_programmatic_fetch_while_loading_is_not_refused() {
        let mut app = test_app();
        update(&mut app, Action::Fetch);
        assert_eq!(update(&mut app, Action::Fetch), Effect::SpawnFetch);
        assert_eq!(app.fetch_count, 2);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.facts, crate::core::state::FactState::default());
    }
}
