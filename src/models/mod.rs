pub mod analysis;
pub mod enums;
pub mod prediction;
pub mod recommendation;

pub use analysis::{
    ConditionReport, EmergencyAssessment, HealthInsights, ImageAnalysis, PatientInfo,
    SymptomAnalysis,
};
pub use enums::{EmergencyRisk, InvalidEnum, RiskLevel, Severity, Urgency};
pub use prediction::{rank_descending, round_score, Prediction};
pub use recommendation::RecommendationBundle;
