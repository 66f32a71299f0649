//! Personalized educational health insights from optional patient context.
//! String tables only; no scoring.

use chrono::Utc;

use crate::models::{HealthInsights, PatientInfo};

/// Medical-history substrings and the risk-factor note each one raises.
static HISTORY_RISK_FACTORS: &[(&str, &str)] = &[
    ("diabetes", "Increased risk for cardiovascular disease and complications"),
    ("hypertension", "Risk factor for heart disease and stroke"),
    ("heart", "Cardiovascular risk factors present"),
    ("cancer", "Oncology follow-up and screening important"),
    ("asthma", "Respiratory health monitoring needed"),
    ("allergy", "Allergy management and avoidance strategies important"),
];

/// Build insights for the given patient context. Works with any subset of
/// fields; missing fields simply contribute nothing.
pub fn build_insights(patient: &PatientInfo) -> HealthInsights {
    let mut insights = Vec::new();
    let mut risk_factors = Vec::new();

    if let Some(age) = patient.age {
        insights.push(age_insight(age).to_string());
    }

    if let Some(history) = &patient.medical_history {
        risk_factors.extend(history_risk_factors(history));
    }

    HealthInsights {
        success: true,
        insights,
        recommendations: vec![
            "Maintain regular exercise routine".to_string(),
            "Follow balanced diet".to_string(),
            "Get adequate sleep (7-9 hours)".to_string(),
            "Stay hydrated".to_string(),
            "Schedule regular health check-ups with healthcare provider".to_string(),
        ],
        risk_factors,
        preventive_measures: vec![
            "Annual health screenings with healthcare provider".to_string(),
            "Stay up to date with vaccinations as recommended by healthcare provider".to_string(),
            "Practice stress management techniques".to_string(),
            "Apply sun protection when outdoors".to_string(),
            "Maintain regular dental care".to_string(),
        ],
        timestamp: Utc::now(),
    }
}

/// Age-band educational sentence.
pub fn age_insight(age: u32) -> &'static str {
    if age < 18 {
        "Focus on healthy growth and development, regular pediatric check-ups, and establishing good health habits."
    } else if age < 30 {
        "Maintain active lifestyle, establish preventive care routine, and focus on mental health and stress management."
    } else if age < 50 {
        "Regular health screenings become important, monitor cardiovascular health, and maintain work-life balance."
    } else if age < 65 {
        "Increase frequency of health screenings, focus on chronic disease prevention, and maintain bone health."
    } else {
        "Comprehensive geriatric care, fall prevention, and social engagement are key priorities."
    }
}

/// Scan a medical-history string for known risk factors.
pub fn history_risk_factors(medical_history: &str) -> Vec<String> {
    let lower = medical_history.to_lowercase();
    HISTORY_RISK_FACTORS
        .iter()
        .filter(|(condition, _)| lower.contains(condition))
        .map(|(_, risk)| risk.to_string())
        .collect()
}
