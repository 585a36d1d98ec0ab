//! # Plain Adapter
//!
//! Line-mode front end for pipes and dumb terminals. Each render prints the
//! current view as text; stdin drives the trigger:
//!
//! - empty line or `n`: fetch another fact
//! - `q` or EOF: quit

use std::io::Write;
use std::sync::Arc;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::config::ResolvedConfig;
use crate::core::state::FactState;
use crate::core::view::{LOADING_LABEL, ViewLine, trigger_label, view_lines};
use crate::core::viewer::{FactViewer, Renderer};
use crate::facts::HttpFactSource;

/// Writes every state as a short block of text.
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// Text for one state, one line per view line. The prompt line only
/// appears once the trigger is usable again.
pub fn format_state(state: &FactState) -> String {
    let mut text = String::new();
    for line in view_lines(state) {
        match line {
            ViewLine::Loading => text.push_str(LOADING_LABEL),
            ViewLine::Error(msg) => {
                text.push_str("! ");
                text.push_str(msg);
            }
            ViewLine::Fact(fact) => {
                text.push_str("> ");
                text.push_str(fact);
            }
        }
        text.push('\n');
    }
    if state.trigger_enabled() {
        text.push_str(&format!("[Enter] {}  [q] Quit\n", trigger_label(state)));
    }
    text
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render(&mut self, state: &FactState) {
        let text = format_state(state);
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!("Failed to write plain output: {}", e);
        }
    }
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = Arc::new(HttpFactSource::new(config.endpoint_url.clone()));
    info!("Plain mode against {}", source.url());

    let renderer = PlainRenderer::new(std::io::stdout());
    let mut viewer = FactViewer::mount(source, renderer).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => break,
            "" | "n" => {
                viewer.press_trigger().await;
            }
            other => {
                info!("Ignoring unknown input {:?}", other);
            }
        }
    }

    info!("Plain mode done after {} fetches", viewer.fetch_count());
    Ok(())
}
