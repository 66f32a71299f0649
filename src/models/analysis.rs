use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{EmergencyRisk, Severity};
use super::prediction::Prediction;
use super::recommendation::RecommendationBundle;
use crate::skin::abcd::RiskScore;

/// Optional caller-supplied patient context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
}

/// One condition entry in an outward analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionReport {
    pub name: String,
    pub probability: f64,
    pub confidence: f64,
    pub description: String,
    pub severity: Severity,
    /// Filtered, condition-specific guidance.
    pub recommendations: Vec<String>,
}

/// Structured result of a symptom analysis.
///
/// `success` is always present; on failure `error` carries the reason and
/// all list fields are empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub analysis_id: Uuid,
    pub conditions: Vec<ConditionReport>,
    pub recommendations: RecommendationBundle,
    /// min(mean prediction probability, 95).
    pub overall_confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl SymptomAnalysis {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            analysis_id: Uuid::new_v4(),
            conditions: Vec::new(),
            recommendations: RecommendationBundle::new(crate::models::enums::Urgency::Medium),
            overall_confidence: 0.0,
            timestamp: Utc::now(),
        }
    }
}

/// Structured result of an image-description analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub analysis_id: Uuid,
    pub conditions: Vec<Prediction>,
    /// Present when any predicted condition name contains "mole".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abcd_analysis: Option<RiskScore>,
    /// Filtered immediate actions for the top conditions.
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl ImageAnalysis {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            analysis_id: Uuid::new_v4(),
            conditions: Vec::new(),
            abcd_analysis: None,
            recommendations: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

/// Result of an emergency symptom assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyAssessment {
    pub success: bool,
    pub risk_level: EmergencyRisk,
    /// One-sentence urgency guidance for the assessed level.
    pub urgency_note: String,
    /// Input symptoms that matched the emergency set.
    pub emergency_symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Personalized educational insights derived from patient context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthInsights {
    pub success: bool,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub preventive_measures: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
