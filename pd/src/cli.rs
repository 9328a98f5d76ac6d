//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::DetailLevel;

/// plandesk - keyword-routed planning assistant
#[derive(Parser, Debug)]
#[command(
    name = "pd",
    about = "Ask for information, make plans, and clarify next steps",
    version,
    after_help = "Logs are written to: ~/.local/share/plandesk/logs/plandesk.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute; the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive session
    Repl,

    /// Explain a topic
    Info {
        /// Topic to explain
        topic: String,

        /// Subtopic to include (repeatable)
        #[arg(short = 's', long = "subtopic")]
        subtopics: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a plan for an objective
    Plan {
        /// What the plan should achieve
        objective: String,

        /// Constraint to address (repeatable)
        #[arg(short = 'C', long = "constraint")]
        constraints: Vec<String>,

        /// Background recorded in the plan notes
        #[arg(long)]
        context: Option<String>,

        /// Also clarify the new plan at this detail level (high, medium, low)
        #[arg(short, long)]
        detail: Option<DetailLevel>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for one-shot commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}
