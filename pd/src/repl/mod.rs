//! Interactive REPL for plandesk
//!
//! Reads free-text requests, routes them by keyword, asks follow-up
//! questions for the fields each request needs, and prints the answer.

mod prompt;
mod session;

pub use prompt::{LineEditor, Prompt, ReadOutcome};
pub use session::{Reply, ReplSession};

use std::sync::Arc;

use eyre::Result;
use tracing::info;

use crate::config::Config;
use crate::registry::PlanRegistry;
use crate::responder::CannedInformation;

/// Run the interactive REPL
///
/// This is the main entry point for `pd` and `pd repl`.
pub async fn run_interactive(config: &Config) -> Result<()> {
    let editor = LineEditor::new(config.history_file.clone())?;
    let mut session = ReplSession::new(
        editor,
        PlanRegistry::new(),
        Arc::new(CannedInformation),
        config.clone(),
    );

    info!("Starting interactive session");
    session.run().await
}
