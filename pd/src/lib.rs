//! plandesk - keyword-routed planning assistant
//!
//! Accepts free-text requests and answers them with one of three canned
//! responders: information lookup, plan creation, and plan clarification.
//!
//! # Modules
//!
//! - [`domain`] - Request and response types
//! - [`registry`] - In-memory plan store with sequential `plan-{n}` IDs
//! - [`responder`] - Information and clarification responders
//! - [`router`] - Keyword routing of free-text input
//! - [`render`] - Terminal formatting
//! - [`repl`] - Interactive session
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use plandesk::{ClarificationRequest, DetailLevel, PlanRegistry, PlanRequest, clarify_plan};
//!
//! let mut registry = PlanRegistry::new();
//! let created = registry.create_plan(&PlanRequest::new("Build a mobile app")).unwrap();
//!
//! let request = ClarificationRequest::new(created.id.to_string()).with_detail_level(DetailLevel::Low);
//! let clarification = clarify_plan(&registry, &request).unwrap();
//! assert_eq!(clarification.next_steps.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod render;
pub mod repl;
pub mod responder;
pub mod router;

// Re-export commonly used types
pub use config::Config;
pub use domain::{
    ActionStep, ClarificationRequest, ClarificationResponse, CreatedPlan, DetailLevel, InformationRequest,
    InformationResponse, PlanId, PlanRequest, PlanResponse, PlanUpdate,
};
pub use error::AssistantError;
pub use registry::{PlanLookup, PlanRegistry, SharedRegistry, template_steps};
pub use responder::{CannedInformation, InformationSource, clarify_plan};
pub use router::{Intent, route};
