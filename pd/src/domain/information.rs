//! Information lookup types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_topics: Vec<String>,
}

impl InformationRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sub_topics: Vec::new(),
        }
    }

    pub fn with_sub_topics<I, S>(mut self, sub_topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_topics = sub_topics.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationResponse {
    pub summary: String,
    pub detailed_explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}
