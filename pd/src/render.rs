//! Terminal rendering of responses
//!
//! Every function returns the text instead of printing it, so the REPL and
//! the one-shot commands share output and tests can inspect it.

use colored::Colorize;

use crate::domain::{ClarificationResponse, InformationResponse, PlanId, PlanResponse};

pub fn welcome() -> String {
    [
        String::new(),
        format!("{}", "🤖 Welcome to plandesk - your planning assistant!".bright_cyan().bold()),
        String::new(),
        "plandesk can help you with:".to_string(),
        "  1. Information Exploration - Get detailed information on topics".to_string(),
        "  2. Plan Management - Create actionable plans for your objectives".to_string(),
        "  3. Clarity and Next Steps - Break down complex plans into clear steps".to_string(),
        String::new(),
        format!(
            "Type {} or {} to end the session, {} for commands.",
            "exit".yellow(),
            "quit".yellow(),
            "/help".yellow()
        ),
        String::new(),
    ]
    .join("\n")
}

pub fn help() -> String {
    let commands = [
        ("/help", "Show this help"),
        ("/quit", "Exit the session"),
        ("/plans", "List plans created this session"),
        ("/show <id>", "Show a stored plan"),
        ("/note <id> <text>", "Replace a plan's notes"),
        ("/unnote <id>", "Clear a plan's notes"),
        ("/rename <id> <title>", "Replace a plan's title"),
    ];

    let mut lines = vec![String::new(), format!("{}", "Available Commands:".bright_cyan())];
    for (name, about) in commands {
        lines.push(format!("  {:22} {}", name.yellow(), about));
    }
    lines.push(String::new());
    lines.push(format!("{}", "Or just ask:".bright_cyan()));
    lines.push("  \"Tell me about ...\"   \"Make a plan\"   \"What are the next steps?\"".to_string());
    lines.join("\n")
}

pub fn information(response: &InformationResponse, show_references: bool) -> String {
    let mut lines = vec![format!("📚 {}", response.summary.bold()), String::new()];
    lines.push(response.detailed_explanation.clone());

    if show_references
        && let Some(references) = response.references.as_ref().filter(|r| !r.is_empty())
    {
        lines.push(String::new());
        lines.push("References:".to_string());
        lines.extend(references.iter().map(|r| format!("- {}", r)));
    }
    lines.join("\n")
}

/// A plan with its steps; the ID heading is shown when known
pub fn plan(id: Option<PlanId>, plan: &PlanResponse) -> String {
    let mut lines = vec![format!("📝 Plan: {}", plan.title.bold())];
    if let Some(id) = id {
        lines.push(format!("   ID: {}", id.to_string().cyan()));
    }
    lines.push(String::new());
    lines.push("Steps:".to_string());

    for step in &plan.steps {
        lines.push(format!("{}. {}", step.step_number, step.description));
        if let Some(duration) = &step.duration {
            lines.push(format!("   Duration: {}", duration));
        }
        let deps = step.dependency_list();
        if !deps.is_empty() {
            let joined: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
            lines.push(format!("   Dependencies: Steps {}", joined.join(", ")));
        }
    }

    if let Some(notes) = &plan.notes {
        lines.push(String::new());
        lines.push(format!("Notes: {}", notes));
    }
    lines.join("\n")
}

pub fn clarification(response: &ClarificationResponse) -> String {
    let mut lines = vec![format!("🔍 Plan Summary: {}", response.plan_summary), String::new()];
    lines.push("Next Steps:".to_string());
    lines.extend(
        response
            .next_steps
            .iter()
            .map(|s| format!("{}. {}", s.step_number, s.description)),
    );

    if let Some(risks) = response.highlighted_risks.as_ref().filter(|r| !r.is_empty()) {
        lines.push(String::new());
        lines.push("Potential Risks:".to_string());
        lines.extend(risks.iter().map(|r| format!("⚠️ {}", r.yellow())));
    }
    lines.join("\n")
}

/// One line per stored plan
pub fn plan_list<'a>(plans: impl IntoIterator<Item = (PlanId, &'a PlanResponse)>) -> String {
    let lines: Vec<String> = plans
        .into_iter()
        .map(|(id, plan)| format!("  {:10} {}", id.to_string().cyan(), plan.title))
        .collect();

    if lines.is_empty() {
        format!("{}", "No plans yet. Ask me to make a plan.".dimmed())
    } else {
        lines.join("\n")
    }
}

pub fn unrecognized() -> String {
    [
        "I'm not sure how to help with that. You can ask me for:",
        "- Information about a topic",
        "- Creating a plan for an objective",
        "- Clarification on next steps for a plan",
    ]
    .join("\n")
}

pub fn error(message: &str) -> String {
    format!("{} {}", "Sorry, I encountered an error:".red(), message)
}

pub fn cancelled() -> String {
    format!("{}", "Request cancelled.".dimmed())
}

pub fn goodbye() -> String {
    "Thank you for using plandesk! Goodbye! 👋".to_string()
}
