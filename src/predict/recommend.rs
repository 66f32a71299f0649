//! Urgency derivation and fixed recommendation bundles.

use crate::models::{Prediction, RecommendationBundle, Urgency};

/// Matched symptoms that force urgency to High regardless of probability.
pub static HIGH_RISK_SYMPTOMS: &[&str] = &[
    "chest_pain",
    "breathlessness",
    "severe_headache",
    "high_fever",
    "severe_abdominal_pain",
];

/// Probability above which urgency escalates to Medium.
const MEDIUM_URGENCY_PROBABILITY: f64 = 70.0;
/// Probability above which urgency escalates to High.
const HIGH_URGENCY_PROBABILITY: f64 = 85.0;

/// Derive the urgency level for a ranked prediction list.
pub fn derive_urgency(predictions: &[Prediction]) -> Urgency {
    let Some(top) = predictions.first() else {
        return Urgency::Medium;
    };

    let mut urgency = Urgency::Low;
    if top.probability > MEDIUM_URGENCY_PROBABILITY {
        urgency = Urgency::Medium;
    }
    if top.probability > HIGH_URGENCY_PROBABILITY {
        urgency = Urgency::High;
    }

    let high_risk_match = predictions.iter().any(|p| {
        p.matching_symptoms
            .iter()
            .any(|s| HIGH_RISK_SYMPTOMS.contains(&s.as_str()))
    });
    if high_risk_match {
        tracing::debug!("High-risk symptom present, forcing High urgency");
        urgency = Urgency::High;
    }

    urgency
}

/// Build the recommendation bundle for a prediction list.
///
/// Always returns a bundle; an empty prediction list gets the generic
/// consultation fallback.
pub fn get_recommendations(predictions: &[Prediction]) -> RecommendationBundle {
    if predictions.is_empty() {
        return RecommendationBundle {
            urgency: Urgency::Medium,
            actions: to_strings(&["Consult with a healthcare provider for proper evaluation"]),
            self_care: to_strings(&["Monitor symptoms", "Rest and stay hydrated"]),
            warning_signs: to_strings(&[
                "Worsening symptoms",
                "High fever",
                "Difficulty breathing",
            ]),
        };
    }

    let urgency = derive_urgency(predictions);

    RecommendationBundle {
        urgency,
        actions: to_strings(actions_for(urgency)),
        self_care: to_strings(&[
            "Get adequate rest",
            "Stay well hydrated",
            "Eat nutritious foods",
            "Avoid strenuous activities",
        ]),
        warning_signs: to_strings(&[
            "Symptoms worsen significantly",
            "Development of high fever (>101.3\u{b0}F/38.5\u{b0}C)",
            "Difficulty breathing or chest pain",
            "Severe or persistent vomiting",
            "Signs of dehydration",
        ]),
    }
}

/// Fixed action list for an urgency level.
pub fn actions_for(urgency: Urgency) -> &'static [&'static str] {
    match urgency {
        Urgency::High => &[
            "Seek immediate medical attention",
            "Consider visiting emergency room if symptoms are severe",
            "Do not delay medical care",
        ],
        Urgency::Medium => &[
            "Schedule appointment with healthcare provider within 24-48 hours",
            "Monitor symptoms closely",
            "Seek immediate care if symptoms worsen",
        ],
        Urgency::Low => &[
            "Consider consulting healthcare provider if symptoms persist",
            "Monitor symptoms for changes",
            "Practice self-care measures",
        ],
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
