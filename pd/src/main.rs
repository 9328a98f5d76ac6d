//! plandesk CLI entry point

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use plandesk::cli::{Cli, Command, OutputFormat};
use plandesk::{
    CannedInformation, ClarificationRequest, Config, DetailLevel, InformationRequest, InformationSource, PlanRegistry,
    PlanRequest, clarify_plan, render, repl,
};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plandesk")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("plandesk.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run_interactive(&config).await,
        Command::Info {
            topic,
            subtopics,
            format,
        } => cmd_info(&config, topic, subtopics, format).await,
        Command::Plan {
            objective,
            constraints,
            context,
            detail,
            format,
        } => cmd_plan(objective, constraints, context, detail, format),
    }
}

async fn cmd_info(config: &Config, topic: String, subtopics: Vec<String>, format: OutputFormat) -> Result<()> {
    debug!(%topic, "cmd_info: called");
    let request = InformationRequest::new(topic).with_sub_topics(subtopics);
    let response = CannedInformation.get_information(&request).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => println!("{}", render::information(&response, config.show_references)),
    }
    Ok(())
}

/// Create the plan in a throwaway registry, optionally clarifying it too
fn cmd_plan(
    objective: String,
    constraints: Vec<String>,
    context: Option<String>,
    detail: Option<DetailLevel>,
    format: OutputFormat,
) -> Result<()> {
    debug!(%objective, ?detail, "cmd_plan: called");
    let mut request = PlanRequest::new(objective).with_constraints(constraints);
    if let Some(context) = context {
        request = request.with_context(context);
    }

    let mut registry = PlanRegistry::new();
    let created = registry.create_plan(&request)?;

    let clarification = detail
        .map(|level| {
            let request = ClarificationRequest::new(created.id.to_string()).with_detail_level(level);
            clarify_plan(&registry, &request)
        })
        .transpose()?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "plan": created,
                "clarification": clarification,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", render::plan(Some(created.id), &created.plan));
            if let Some(clarification) = clarification {
                println!();
                println!("{}", render::clarification(&clarification));
            }
        }
    }
    Ok(())
}
