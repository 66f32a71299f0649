use serde::{Deserialize, Serialize};

use super::enums::{Severity, Urgency};

/// A single ranked condition candidate produced by any scoring source.
///
/// `probability` is the primary ranking score; `confidence` is the secondary
/// evidence-count-driven score. Image-based sources set both to the same
/// value. Scores are percentages in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Disease or condition name.
    pub name: String,
    /// Primary ranking score in [0, 100].
    pub probability: f64,
    /// Secondary score in [0, 100], driven by how much evidence matched.
    pub confidence: f64,
    /// The symptom tokens or description phrases that matched.
    pub matching_symptoms: Vec<String>,
    /// Severity assigned by image-based scoring, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Urgency assigned by the knowledge base, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    /// Whether a neural classifier contributed to this score.
    #[serde(default)]
    pub cnn_derived: bool,
    /// Free-text annotation (e.g. the unmatched-input placeholder note).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Prediction {
    /// A prediction with only a name and scores; evidence and flags empty.
    pub fn new(name: impl Into<String>, probability: f64, confidence: f64) -> Self {
        Self {
            name: name.into(),
            probability,
            confidence,
            matching_symptoms: Vec::new(),
            severity: None,
            urgency: None,
            cnn_derived: false,
            note: None,
        }
    }

    pub fn with_matches(mut self, matches: Vec<String>) -> Self {
        self.matching_symptoms = matches;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Sort predictions by descending probability, ties broken by name.
pub fn rank_descending(predictions: &mut [Prediction]) {
    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Round a score to one decimal place, the precision reported to callers.
pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
