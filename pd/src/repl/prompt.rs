//! Line input for the REPL

use std::path::PathBuf;

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

/// Result of asking the user for one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D or end of input
    Eof,
}

/// Source of user input lines
pub trait Prompt {
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome>;

    /// Called once when the session ends
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Readline-backed prompt with optional persistent history
pub struct LineEditor {
    rl: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl LineEditor {
    pub fn new(history_file: Option<PathBuf>) -> Result<Self> {
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        if let Some(path) = &history_file
            && path.exists()
            && let Err(e) = rl.load_history(path)
        {
            warn!("Failed to load history from {}: {}", path.display(), e);
        }

        Ok(Self { rl, history_file })
    }
}

impl Prompt for LineEditor {
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.trim());
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(path) = &self.history_file {
            debug!(path = %path.display(), "LineEditor::finish: saving history");
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.rl
                .save_history(path)
                .map_err(|e| eyre::eyre!("Failed to save history to {}: {}", path.display(), e))?;
        }
        Ok(())
    }
}
