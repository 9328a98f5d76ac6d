//! REPL session management

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use tracing::{debug, warn};

use super::prompt::{Prompt, ReadOutcome};
use crate::config::Config;
use crate::domain::{ClarificationRequest, DetailLevel, InformationRequest, PlanRequest, PlanUpdate};
use crate::error::AssistantError;
use crate::registry::PlanRegistry;
use crate::render;
use crate::responder::{InformationSource, clarify_plan};
use crate::router::{Intent, route};

/// What the loop should do after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Interactive REPL session
///
/// Owns the plan registry for its lifetime; plans are gone when it ends.
pub struct ReplSession<P: Prompt> {
    prompt: P,
    registry: PlanRegistry,
    info: Arc<dyn InformationSource>,
    config: Config,
}

impl<P: Prompt> ReplSession<P> {
    pub fn new(prompt: P, registry: PlanRegistry, info: Arc<dyn InformationSource>, config: Config) -> Self {
        Self {
            prompt,
            registry,
            info,
            config,
        }
    }

    pub fn registry(&self) -> &PlanRegistry {
        &self.registry
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", render::welcome());

        loop {
            let input = match self.prompt.read("What can I help you with today? ")? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                ReadOutcome::Eof => {
                    println!();
                    break;
                }
            };

            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            match self.respond(input).await? {
                Reply::Output(text) => {
                    println!();
                    println!("{}", text);
                    println!("\n---\n");
                }
                Reply::Quit => break,
            }
        }

        println!("{}", render::goodbye());
        self.prompt.finish()
    }

    /// Handle one line of input
    ///
    /// Request failures come back as rendered output; only input errors are `Err`.
    pub async fn respond(&mut self, input: &str) -> Result<Reply> {
        debug!(%input, "respond: called");
        if input.starts_with('/') {
            return self.handle_slash_command(input);
        }

        let result = match route(input) {
            Intent::Exit => return Ok(Reply::Quit),
            Intent::Information => self.information().await,
            Intent::Plan => self.plan(),
            Intent::Clarification => self.clarification(),
            Intent::Unrecognized => Ok(render::unrecognized()),
        };

        recover(result).map(Reply::Output)
    }

    async fn information(&mut self) -> Result<String> {
        let Some(topic) = self.ask("What topic would you like information about? ")? else {
            return Ok(render::cancelled());
        };
        let Some(sub_topics) = self.ask("Any subtopics? (comma-separated, blank for none) ")? else {
            return Ok(render::cancelled());
        };

        let request = InformationRequest::new(topic).with_sub_topics(split_list(&sub_topics));
        println!("\n{}", "Fetching information...".dimmed());
        let response = self.info.get_information(&request).await?;

        Ok(render::information(&response, self.config.show_references))
    }

    fn plan(&mut self) -> Result<String> {
        let Some(objective) = self.ask("What is your objective? ")? else {
            return Ok(render::cancelled());
        };
        let Some(constraints) = self.ask("Any constraints? (comma-separated, blank for none) ")? else {
            return Ok(render::cancelled());
        };
        let Some(context) = self.ask("Any context to note? (blank for none) ")? else {
            return Ok(render::cancelled());
        };

        let mut request = PlanRequest::new(objective).with_constraints(split_list(&constraints));
        if !context.trim().is_empty() {
            request = request.with_context(context.trim());
        }

        println!("\n{}", "Creating plan...".dimmed());
        let created = self.registry.create_plan(&request)?;

        Ok(render::plan(Some(created.id), &created.plan))
    }

    fn clarification(&mut self) -> Result<String> {
        let Some(plan_id) = self.ask("Which plan would you like clarification on? (Enter plan ID): ")? else {
            return Ok(render::cancelled());
        };
        let default_level = self.config.detail_level;
        let Some(level) = self.ask(&format!("Detail level? (high/medium/low, blank for {}) ", default_level))? else {
            return Ok(render::cancelled());
        };

        let detail_level = if level.trim().is_empty() {
            default_level
        } else {
            level.parse::<DetailLevel>().map_err(AssistantError::validation)?
        };

        println!("\n{}", "Getting clarification...".dimmed());
        let request = ClarificationRequest::new(plan_id.trim()).with_detail_level(detail_level);
        let response = clarify_plan(&self.registry, &request)?;

        Ok(render::clarification(&response))
    }

    /// Handle slash commands
    fn handle_slash_command(&mut self, input: &str) -> Result<Reply> {
        let mut parts = input.splitn(3, char::is_whitespace);
        let cmd = parts.next().unwrap_or("");
        let plan_id = parts.next().unwrap_or("").trim();
        let rest = parts.next().unwrap_or("").trim();

        let result = match cmd {
            "/help" | "/h" => Ok(render::help()),
            "/quit" | "/q" | "/exit" => return Ok(Reply::Quit),
            "/plans" => Ok(render::plan_list(self.registry.iter())),
            "/show" if !plan_id.is_empty() => self
                .registry
                .get_plan(plan_id)
                .map(|plan| render::plan(plan_id.parse().ok(), plan))
                .ok_or_else(|| AssistantError::plan_not_found(plan_id).into()),
            "/note" if !plan_id.is_empty() && !rest.is_empty() => self.update(plan_id, PlanUpdate::new().notes(rest)),
            "/rename" if !plan_id.is_empty() && !rest.is_empty() => {
                self.update(plan_id, PlanUpdate::new().title(rest))
            }
            "/unnote" if !plan_id.is_empty() => self.update(plan_id, PlanUpdate::new().clear_notes()),
            "/show" | "/note" | "/rename" | "/unnote" => {
                Ok(format!("{} Usage: see {}", "?".yellow(), "/help".yellow()))
            }
            _ => Ok(format!(
                "{} Unknown command: {}\nType {} for available commands",
                "?".yellow(),
                cmd,
                "/help".yellow()
            )),
        };

        recover(result).map(Reply::Output)
    }

    fn update(&mut self, plan_id: &str, update: PlanUpdate) -> Result<String> {
        let plan = self.registry.update_plan(plan_id, update)?;
        Ok(render::plan(plan_id.parse().ok(), &plan))
    }

    /// Ask a follow-up question; `None` when the user cancels
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        match self.prompt.read(question)? {
            ReadOutcome::Line(line) => Ok(Some(line)),
            ReadOutcome::Interrupted | ReadOutcome::Eof => Ok(None),
        }
    }
}

/// Turn request failures into user-facing output, pass anything else through
fn recover(result: Result<String>) -> Result<String> {
    match result {
        Ok(text) => Ok(text),
        Err(e) => match e.downcast_ref::<AssistantError>() {
            Some(request_error) => {
                warn!("Request failed: {}", request_error);
                Ok(render::error(&request_error.to_string()))
            }
            None => Err(e),
        },
    }
}

/// Split comma-separated input, dropping blank entries
fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
