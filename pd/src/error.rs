//! Request error types

use thiserror::Error;

/// Errors surfaced by the plan registry and the responders
///
/// Both kinds are per-request failures: front ends report them and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// A required string field was empty or blank
    #[error("{0}")]
    Validation(String),

    #[error("Plan with ID {plan_id} not found")]
    PlanNotFound { plan_id: String },
}

impl AssistantError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn plan_not_found(plan_id: impl Into<String>) -> Self {
        Self::PlanNotFound {
            plan_id: plan_id.into(),
        }
    }
}

/// Fail with `message` when `value` is empty or whitespace-only
pub(crate) fn require_non_blank(value: &str, message: &str) -> Result<(), AssistantError> {
    if value.trim().is_empty() {
        return Err(AssistantError::validation(message));
    }
    Ok(())
}
