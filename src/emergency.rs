//! Emergency symptom assessment: a fixed-list scan that assigns an
//! IMMEDIATE / URGENT / NON-URGENT risk level ahead of any scoring.

use chrono::Utc;

use crate::models::{EmergencyAssessment, EmergencyRisk};

/// Symptoms that trigger an IMMEDIATE risk level on any match.
pub static EMERGENCY_SYMPTOMS: &[&str] = &[
    "chest_pain",
    "difficulty_breathing",
    "severe_headache",
    "loss_of_consciousness",
    "severe_bleeding",
    "signs_of_stroke",
    "severe_allergic_reaction",
    "high_fever_with_confusion",
    "severe_abdominal_pain",
];

/// Symptom count above which an otherwise non-emergency presentation is
/// treated as URGENT.
const URGENT_SYMPTOM_COUNT: usize = 5;

/// Assess raw symptoms for emergency conditions.
///
/// Matching is deliberately loose: each input is lowercased and
/// underscore-joined, then checked for any emergency entry as a substring,
/// so "severe chest pain" still hits "chest_pain". The synonym table is not
/// consulted here; the emergency list stands on its own.
pub fn assess_emergency(symptoms: &[String]) -> EmergencyAssessment {
    let mut emergency_found = Vec::new();

    for symptom in symptoms {
        let normalized = symptom.trim().to_lowercase().replace([' ', '-'], "_");
        if EMERGENCY_SYMPTOMS.iter().any(|e| normalized.contains(e)) {
            emergency_found.push(symptom.clone());
        }
    }

    let risk_level = if !emergency_found.is_empty() {
        tracing::info!(matches = emergency_found.len(), "Emergency symptoms detected");
        EmergencyRisk::Immediate
    } else if symptoms.len() > URGENT_SYMPTOM_COUNT {
        EmergencyRisk::Urgent
    } else {
        EmergencyRisk::NonUrgent
    };

    EmergencyAssessment {
        success: true,
        risk_level,
        urgency_note: urgency_note(risk_level).to_string(),
        emergency_symptoms: emergency_found,
        recommendations: recommendations_for(risk_level)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        timestamp: Utc::now(),
    }
}

fn urgency_note(risk_level: EmergencyRisk) -> &'static str {
    match risk_level {
        EmergencyRisk::Immediate => "Seek emergency medical care immediately",
        EmergencyRisk::Urgent => "Consider seeking medical care within hours",
        EmergencyRisk::NonUrgent => {
            "Monitor symptoms and consider medical consultation if they persist"
        }
    }
}

/// Fixed recommendation list per risk level.
pub fn recommendations_for(risk_level: EmergencyRisk) -> &'static [&'static str] {
    match risk_level {
        EmergencyRisk::Immediate => &[
            "Seek emergency medical care immediately",
            "Do not drive yourself to hospital",
            "Have someone stay with you",
            "Prepare list of current health information",
        ],
        EmergencyRisk::Urgent => &[
            "Consider going to emergency room or urgent care",
            "Do not delay seeking medical care if symptoms worsen",
            "Bring identification and insurance information",
            "Have someone accompany you if possible",
        ],
        EmergencyRisk::NonUrgent => &[
            "Schedule appointment with healthcare provider",
            "Monitor symptoms for changes",
            "Seek immediate care if symptoms worsen significantly",
            "Practice self-care measures",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn chest_pain_is_immediate() {
        let assessment = assess_emergency(&owned(&["chest pain", "sweating"]));
        assert_eq!(assessment.risk_level, EmergencyRisk::Immediate);
        assert_eq!(assessment.emergency_symptoms, owned(&["chest pain"]));
        assert!(assessment.urgency_note.contains("immediately"));
    }

    #[test]
    fn compound_phrases_still_match() {
        let assessment = assess_emergency(&owned(&["sudden severe chest pain on exertion"]));
        assert_eq!(assessment.risk_level, EmergencyRisk::Immediate);
    }

    #[test]
    fn many_symptoms_without_emergency_are_urgent() {
        let assessment = assess_emergency(&owned(&[
            "cough", "fatigue", "sore throat", "sneezing", "mild fever", "headache",
        ]));
        assert_eq!(assessment.risk_level, EmergencyRisk::Urgent);
        assert!(assessment.emergency_symptoms.is_empty());
    }

    #[test]
    fn few_benign_symptoms_are_non_urgent() {
        let assessment = assess_emergency(&owned(&["cough", "sneezing"]));
        assert_eq!(assessment.risk_level, EmergencyRisk::NonUrgent);
        assert_eq!(assessment.recommendations.len(), 4);
    }

    #[test]
    fn empty_input_is_non_urgent() {
        let assessment = assess_emergency(&[]);
        assert_eq!(assessment.risk_level, EmergencyRisk::NonUrgent);
        assert!(assessment.emergency_symptoms.is_empty());
    }

    #[test]
    fn exactly_five_symptoms_stay_non_urgent() {
        let assessment = assess_emergency(&owned(&[
            "cough", "fatigue", "sore throat", "sneezing", "mild fever",
        ]));
        assert_eq!(assessment.risk_level, EmergencyRisk::NonUrgent);
    }
}
