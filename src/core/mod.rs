//! # Core Application Logic
//!
//! This module contains the fact viewer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FactState (data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view_lines() (view)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Plain    │      │ FactViewer │
//!     │  Adapter   │      │  Adapter   │      │  (tests,   │
//!     │ (ratatui)  │      │  (stdout)  │      │  embedding)│
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `FactState` and `App`, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: What to show for a given state, independent of the backend
//! - [`viewer`]: `FactViewer`, state plus a `Renderer` called after every change
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod state;
pub mod view;
pub mod viewer;
