use serde::{Deserialize, Serialize};

/// What happens to an existing feedback line when the sentence is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackPolicy {
    /// Feedback stays until the next check, even if it no longer matches the sentence.
    #[default]
    KeepUntilCheck,
    /// Any edit hides the previous feedback.
    ClearOnEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default)]
    pub feedback_policy: FeedbackPolicy,
}

impl SessionConfig {
    pub fn with_feedback_policy(mut self, policy: FeedbackPolicy) -> Self {
        self.feedback_policy = policy;
        self
    }
}
