//! Plan domain types
//!
//! A plan is a titled, ordered list of action steps toward an objective.
//! Plans are owned by the [`PlanRegistry`](crate::registry::PlanRegistry)
//! once created and addressed by a [`PlanId`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every rendered plan identifier
pub const PLAN_ID_PREFIX: &str = "plan-";

/// Identifier assigned to a plan by the registry, rendered as `plan-{n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlanId(u64);

impl PlanId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The counter value embedded in the identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", PLAN_ID_PREFIX, self.0)
    }
}

/// Text that is not a `plan-{n}` identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid plan ID: '{0}' (expected plan-<number>)")]
pub struct ParsePlanIdError(String);

impl std::str::FromStr for PlanId {
    type Err = ParsePlanIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the canonical rendering: no sign, no leading zeros
        s.trim()
            .strip_prefix(PLAN_ID_PREFIX)
            .filter(|n| !n.starts_with('0') && !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| ParsePlanIdError(s.to_string()))
    }
}

impl TryFrom<String> for PlanId {
    type Error = ParsePlanIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlanId> for String {
    fn from(id: PlanId) -> Self {
        id.to_string()
    }
}

/// One unit of work in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStep {
    /// 1-based position within the plan
    pub step_number: u32,

    pub description: String,

    /// Free-form estimate such as "2 days"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Step numbers this step waits on (not range-checked)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<u32>>,
}

impl ActionStep {
    pub fn new(step_number: u32, description: impl Into<String>) -> Self {
        Self {
            step_number,
            description: description.into(),
            duration: None,
            dependencies: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn depends_on(mut self, steps: impl IntoIterator<Item = u32>) -> Self {
        self.dependencies = Some(steps.into_iter().collect());
        self
    }

    /// Dependency numbers, empty when none were recorded
    pub fn dependency_list(&self) -> &[u32] {
        self.dependencies.as_deref().unwrap_or_default()
    }
}

/// Input to plan creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub objective: String,

    /// Each constraint becomes one extra step, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl PlanRequest {
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            ..Default::default()
        }
    }

    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// A stored plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub title: String,
    pub steps: Vec<ActionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A freshly created plan together with the identifier it was stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPlan {
    pub id: PlanId,
    #[serde(flatten)]
    pub plan: PlanResponse,
}

/// Partial field replacement for an existing plan
///
/// Unset fields keep their stored value. `steps` is replaced wholesale,
/// never merged element by element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanUpdate {
    pub title: Option<String>,
    pub steps: Option<Vec<ActionStep>>,
    /// `Some(None)` clears the notes
    pub notes: Option<Option<String>>,
}

impl PlanUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn steps(mut self, steps: Vec<ActionStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    pub fn clear_notes(mut self) -> Self {
        self.notes = Some(None);
        self
    }

    /// Merge onto `existing`, producing the new record
    pub fn apply(self, existing: &PlanResponse) -> PlanResponse {
        PlanResponse {
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            steps: self.steps.unwrap_or_else(|| existing.steps.clone()),
            notes: self.notes.unwrap_or_else(|| existing.notes.clone()),
        }
    }
}
