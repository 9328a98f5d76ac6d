//! Information lookup

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{InformationRequest, InformationResponse};
use crate::error::{AssistantError, require_non_blank};

/// Reference links attached to every canned answer
pub const REFERENCES: [&str; 2] = ["https://example.com/reference1", "https://example.com/reference2"];

/// Something that can explain a topic
///
/// Async so a real lookup backend can sit behind the same call; the canned
/// source never suspends.
#[async_trait]
pub trait InformationSource: Send + Sync {
    async fn get_information(&self, request: &InformationRequest) -> Result<InformationResponse, AssistantError>;
}

/// Answers every topic from a fixed template
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedInformation;

#[async_trait]
impl InformationSource for CannedInformation {
    async fn get_information(&self, request: &InformationRequest) -> Result<InformationResponse, AssistantError> {
        debug!(topic = %request.topic, sub_topics = request.sub_topics.len(), "get_information: called");
        if let Err(e) = require_non_blank(&request.topic, "Topic is required") {
            warn!("get_information: {}", e);
            return Err(e);
        }

        let mut detailed_explanation = format!("Detailed explanation about {}", request.topic);
        if !request.sub_topics.is_empty() {
            detailed_explanation.push_str(&format!(" including subtopics: {}", request.sub_topics.join(", ")));
        }

        Ok(InformationResponse {
            summary: format!("Summary about {}", request.topic),
            detailed_explanation,
            references: Some(REFERENCES.iter().map(|r| r.to_string()).collect()),
        })
    }
}
