//! Request and response types for the three assistant features

mod clarification;
mod information;
mod plan;

pub use clarification::{ClarificationRequest, ClarificationResponse, DetailLevel};
pub use information::{InformationRequest, InformationResponse};
pub use plan::{ActionStep, CreatedPlan, ParsePlanIdError, PlanId, PlanRequest, PlanResponse, PlanUpdate};
