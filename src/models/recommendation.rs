use serde::{Deserialize, Serialize};

use super::enums::Urgency;

/// Outward-facing guidance derived from a prediction list.
///
/// Always produced, even for an empty prediction list (fallback bundle).
/// Every string list here passes through the content filter before leaving
/// the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub urgency: Urgency,
    /// What to do next (seek care, schedule, monitor).
    pub actions: Vec<String>,
    /// General self-care measures.
    pub self_care: Vec<String>,
    /// Signs that call for escalating care.
    pub warning_signs: Vec<String>,
}

impl RecommendationBundle {
    pub fn new(urgency: Urgency) -> Self {
        Self {
            urgency,
            actions: Vec::new(),
            self_care: Vec::new(),
            warning_signs: Vec::new(),
        }
    }
}
