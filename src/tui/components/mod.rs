//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top line with the app name, fact source and attempt count
//! - `FactBox`: Loading indicator, error line and fact text
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TriggerButton`: The "Get Another Fact" control. Remembers where it was
//!   drawn so mouse clicks can be hit-tested, and refuses presses while disabled.
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! FactBox::new(&app.facts, spinner_frame).render(frame, area);
//! ```

mod fact_box;
mod title_bar;
pub mod trigger_button;

pub use fact_box::FactBox;
pub use title_bar::TitleBar;
pub use trigger_button::{ButtonEvent, TriggerButton};
