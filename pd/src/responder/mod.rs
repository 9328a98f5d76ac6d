//! Canned responders for information lookup and plan clarification

mod clarify;
mod info;

pub use clarify::{RISK_EXTERNAL_FACTORS, clarify_plan, identify_risks, next_steps, summarize};
pub use info::{CannedInformation, InformationSource, REFERENCES};
