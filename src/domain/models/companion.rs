//! AI companion wire models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current disposition of the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionMood {
    /// General assistance.
    Helpful,
    /// Deep-work support.
    Focused,
    /// Ideation.
    Creative,
    /// Data-heavy reasoning.
    Analytical,
}

/// Companion profile and learning state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionProfile {
    /// Companion display name.
    pub name: String,
    /// Personality description.
    pub personality: String,
    /// Current disposition.
    pub mood: CompanionMood,
    /// Tools the companion may invoke.
    pub available_tools: Vec<String>,
    /// Training progress, 0-100.
    pub learning_progress: f64,
    /// Lifetime interaction count.
    pub interactions: u64,
}

/// Kind of a proactive suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Create or follow up a task.
    Task,
    /// A derived observation.
    Insight,
    /// A time-based nudge.
    Reminder,
    /// A usage tip.
    Tip,
}

/// A proactive suggestion surfaced next to the companion status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// What kind of suggestion this is.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Short headline.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Whether the UI should offer a one-click action.
    pub actionable: bool,
}

/// Payload of the companion-status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionStatus {
    /// Profile and learning state.
    pub companion: CompanionProfile,
    /// Current proactive suggestions.
    pub suggestions: Vec<Suggestion>,
}

/// One rated interaction used for training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingFeedback {
    /// The interaction being rated.
    pub interaction: String,
    /// Rating score.
    pub rating: f64,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for training the companion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingData {
    /// Arbitrary preference document.
    pub preferences: serde_json::Map<String, Value>,
    /// Rated interactions.
    pub feedback: Vec<TrainingFeedback>,
}

/// Category of insights to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Work habits and throughput.
    #[default]
    Productivity,
    /// Pipeline and revenue signals.
    Business,
    /// Individual patterns.
    Personal,
}

impl InsightKind {
    /// Wire value used in the `type` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::Business => "business",
            Self::Personal => "personal",
        }
    }
}

/// Expected effect of acting on an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightImpact {
    /// Act on it.
    High,
    /// Worth a look.
    Medium,
    /// Informational.
    Low,
}

/// A derived insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Insight identifier.
    pub id: String,
    /// Free-form category label.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short headline.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Expected effect of acting on it.
    pub impact: InsightImpact,
    /// Concrete follow-up steps.
    pub action_items: Vec<String>,
    /// Supporting data, shape varies by insight.
    pub data: Value,
}

/// Payload of the insights endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// Insights, highest impact first.
    pub insights: Vec<Insight>,
}
