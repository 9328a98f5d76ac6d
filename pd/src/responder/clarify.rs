//! Plan clarification
//!
//! Derives a summary, the immediate next steps and a risk list from one
//! stored plan. Nothing here is persisted.

use tracing::{debug, warn};

use crate::domain::{ActionStep, ClarificationRequest, ClarificationResponse, DetailLevel, PlanResponse};
use crate::error::AssistantError;
use crate::registry::PlanLookup;

/// Closing entry of every risk list
pub const RISK_EXTERNAL_FACTORS: &str = "Timeline may be affected by external factors.";

/// How many leading steps count as "next"
const NEXT_STEP_COUNT: usize = 2;

pub fn clarify_plan<L: PlanLookup + ?Sized>(
    plans: &L,
    request: &ClarificationRequest,
) -> Result<ClarificationResponse, AssistantError> {
    debug!(plan_id = %request.plan_id, detail_level = %request.detail_level, "clarify_plan: called");
    let Some(plan) = plans.lookup_plan(&request.plan_id) else {
        let e = AssistantError::plan_not_found(&request.plan_id);
        warn!("clarify_plan: {}", e);
        return Err(e);
    };

    Ok(ClarificationResponse {
        plan_summary: summarize(&plan, request.detail_level),
        next_steps: next_steps(&plan),
        highlighted_risks: Some(identify_risks(&plan)),
    })
}

/// Render the plan as text at the requested verbosity
pub fn summarize(plan: &PlanResponse, detail_level: DetailLevel) -> String {
    let (heading, lines): (&str, Vec<String>) = match detail_level {
        DetailLevel::High => ("Detailed Steps", plan.steps.iter().map(detailed_line).collect()),
        DetailLevel::Medium => (
            "Key Steps",
            plan.steps
                .iter()
                .map(|s| format!("{}. {}", s.step_number, s.description))
                .collect(),
        ),
        DetailLevel::Low => {
            return format!(
                "{}\n\nSummary: This plan contains {} steps to achieve the objective.",
                plan.title,
                plan.steps.len()
            );
        }
    };

    let mut summary = format!("{}\n\n{}:\n{}", plan.title, heading, lines.join("\n"));
    if let Some(notes) = &plan.notes {
        summary.push_str(&format!("\n\nNotes: {}", notes));
    }
    summary
}

fn detailed_line(step: &ActionStep) -> String {
    let duration = step.duration.as_deref().unwrap_or("No duration specified");
    let mut line = format!("{}. {} ({})", step.step_number, step.description, duration);

    let deps = step.dependency_list();
    if !deps.is_empty() {
        let joined: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
        line.push_str(&format!(" - Depends on steps: {}", joined.join(", ")));
    }
    line
}

/// The first steps in list order; completion and dependencies are ignored
pub fn next_steps(plan: &PlanResponse) -> Vec<ActionStep> {
    plan.steps.iter().take(NEXT_STEP_COUNT).cloned().collect()
}

/// Flag every step with more than one dependency, then the standing timeline risk
pub fn identify_risks(plan: &PlanResponse) -> Vec<String> {
    plan.steps
        .iter()
        .filter(|s| s.dependency_list().len() > 1)
        .map(|s| format!("Step {} has multiple dependencies", s.step_number))
        .chain(std::iter::once(RISK_EXTERNAL_FACTORS.to_string()))
        .collect()
}
