//! In-memory plan registry
//!
//! Plans are keyed by a [`PlanId`] drawn from a per-registry counter that
//! starts at 1 and never repeats. Records are created, read and updated,
//! never deleted.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{
    ActionStep, ClarificationRequest, ClarificationResponse, CreatedPlan, PlanId, PlanRequest, PlanResponse, PlanUpdate,
};
use crate::error::{AssistantError, require_non_blank};
use crate::responder::clarify_plan;

/// Read access to stored plans by their string identifier
pub trait PlanLookup {
    fn lookup_plan(&self, plan_id: &str) -> Option<PlanResponse>;
}

/// Owns every plan created during the session
#[derive(Debug)]
pub struct PlanRegistry {
    plans: BTreeMap<PlanId, PlanResponse>,
    next_id: u64,
}

impl Default for PlanRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanRegistry {
    pub fn new() -> Self {
        Self {
            plans: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Build a plan from the step template and store it under a fresh ID
    pub fn create_plan(&mut self, request: &PlanRequest) -> Result<CreatedPlan, AssistantError> {
        debug!(objective = %request.objective, constraints = request.constraints.len(), "create_plan: called");
        if let Err(e) = require_non_blank(&request.objective, "Objective is required") {
            warn!("create_plan: {}", e);
            return Err(e);
        }

        let plan = PlanResponse {
            title: format!("Plan for: {}", request.objective),
            steps: template_steps(&request.objective, &request.constraints),
            notes: request.context.as_ref().map(|c| format!("Context: {}", c)),
        };

        let id = PlanId::new(self.next_id);
        self.next_id += 1;
        self.plans.insert(id, plan.clone());

        info!(%id, steps = plan.steps.len(), "Created plan");
        Ok(CreatedPlan { id, plan })
    }

    /// Look up a plan by its rendered identifier; unparseable IDs are a miss
    pub fn get_plan(&self, plan_id: &str) -> Option<&PlanResponse> {
        debug!(%plan_id, "get_plan: called");
        plan_id.parse::<PlanId>().ok().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: PlanId) -> Option<&PlanResponse> {
        self.plans.get(&id)
    }

    /// Shallow-merge `update` onto the stored plan and return the new record
    pub fn update_plan(&mut self, plan_id: &str, update: PlanUpdate) -> Result<PlanResponse, AssistantError> {
        debug!(%plan_id, ?update, "update_plan: called");
        let Some(existing) = plan_id.parse::<PlanId>().ok().and_then(|id| self.plans.get_mut(&id)) else {
            let e = AssistantError::plan_not_found(plan_id);
            warn!("update_plan: {}", e);
            return Err(e);
        };

        *existing = update.apply(existing);
        info!(%plan_id, "Updated plan");
        Ok(existing.clone())
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Plans in creation order
    pub fn iter(&self) -> impl Iterator<Item = (PlanId, &PlanResponse)> {
        self.plans.iter().map(|(id, plan)| (*id, plan))
    }
}

impl PlanLookup for PlanRegistry {
    fn lookup_plan(&self, plan_id: &str) -> Option<PlanResponse> {
        self.get_plan(plan_id).cloned()
    }
}

/// Fixed three-step template, then one step per constraint hanging off step 3
pub fn template_steps(objective: &str, constraints: &[String]) -> Vec<ActionStep> {
    let mut steps = vec![
        ActionStep::new(1, format!("Research {}", objective)).with_duration("2 days"),
        ActionStep::new(2, "Analyze findings").with_duration("1 day").depends_on([1]),
        ActionStep::new(3, "Create implementation strategy")
            .with_duration("3 days")
            .depends_on([2]),
    ];

    for (step_number, constraint) in (4u32..).zip(constraints) {
        steps.push(
            ActionStep::new(step_number, format!("Address constraint: {}", constraint))
                .with_duration("1 day")
                .depends_on([3]),
        );
    }

    steps
}

/// A registry shared between tasks
///
/// Create, get and update all go through one lock, so IDs stay unique and a
/// read after a write always sees it.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<PlanRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: PlanRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub async fn create_plan(&self, request: &PlanRequest) -> Result<CreatedPlan, AssistantError> {
        self.inner.lock().await.create_plan(request)
    }

    pub async fn get_plan(&self, plan_id: &str) -> Option<PlanResponse> {
        self.inner.lock().await.lookup_plan(plan_id)
    }

    pub async fn update_plan(&self, plan_id: &str, update: PlanUpdate) -> Result<PlanResponse, AssistantError> {
        self.inner.lock().await.update_plan(plan_id, update)
    }

    /// Clarify while holding the lock so the plan can't change underneath
    pub async fn clarify_plan(&self, request: &ClarificationRequest) -> Result<ClarificationResponse, AssistantError> {
        let registry = self.inner.lock().await;
        clarify_plan(&*registry, request)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
