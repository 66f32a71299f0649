use serde::{Deserialize, Serialize};

/// A static rule mapping a disease to its characteristic symptom set.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseRule {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    /// Probability assigned at full symptom coverage, in [0, 100].
    pub base_probability: f64,
}

/// Rule table used when no reference dataset is available.
pub static DISEASE_RULES: &[DiseaseRule] = &[
    DiseaseRule {
        name: "Common Cold",
        symptoms: &["runny_nose", "congestion", "sneezing", "cough", "mild_fever", "sore_throat"],
        base_probability: 70.0,
    },
    DiseaseRule {
        name: "Flu",
        symptoms: &["high_fever", "muscle_pain", "fatigue", "headache", "cough", "chills"],
        base_probability: 65.0,
    },
    DiseaseRule {
        name: "Migraine",
        symptoms: &["headache", "nausea", "vomiting", "visual_disturbances", "sensitivity_to_light"],
        base_probability: 80.0,
    },
    DiseaseRule {
        name: "Gastroenteritis",
        symptoms: &["nausea", "vomiting", "diarrhoea", "abdominal_pain", "fever"],
        base_probability: 75.0,
    },
    DiseaseRule {
        name: "Allergic Reaction",
        symptoms: &["skin_rash", "itching", "sneezing", "watering_from_eyes", "swelling"],
        base_probability: 70.0,
    },
    DiseaseRule {
        name: "Hypertension",
        symptoms: &["headache", "dizziness", "chest_pain", "breathlessness"],
        base_probability: 60.0,
    },
    DiseaseRule {
        name: "Urinary Tract Infection",
        symptoms: &["burning_micturition", "frequent_urination", "abdominal_pain", "fever"],
        base_probability: 85.0,
    },
];

/// One parsed row of the reference dataset: a disease and the symptoms it
/// presents with. Parsing the source file is the loader's concern; the scorer
/// only consumes rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub disease: String,
    pub symptoms: Vec<String>,
}

impl DatasetRecord {
    pub fn new(disease: impl Into<String>, symptoms: &[&str]) -> Self {
        Self {
            disease: disease.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Educational reference entry for a disease.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub severity: &'static str,
    pub typical_duration: &'static str,
    pub treatment: &'static str,
}

static DISEASE_INFO: &[(&str, DiseaseInfo)] = &[
    (
        "Common Cold",
        DiseaseInfo {
            description: "A viral infection of the upper respiratory tract that commonly affects the nose and throat.",
            severity: "Low",
            typical_duration: "7-10 days",
            treatment: "Rest, fluids, and symptom relief as advised by a healthcare provider",
        },
    ),
    (
        "Flu",
        DiseaseInfo {
            description: "A viral infection that attacks the respiratory system, causing fever, aches, and fatigue.",
            severity: "Medium",
            typical_duration: "1-2 weeks",
            treatment: "Rest, fluids, and early consultation with a healthcare provider",
        },
    ),
    (
        "Migraine",
        DiseaseInfo {
            description: "A neurological condition characterized by severe headaches, often with nausea and sensitivity to light.",
            severity: "Medium",
            typical_duration: "4-72 hours per episode",
            treatment: "Lifestyle changes and management options discussed with a healthcare provider",
        },
    ),
    (
        "Gastroenteritis",
        DiseaseInfo {
            description: "Inflammation of the stomach and intestines, typically causing vomiting and diarrhea.",
            severity: "Medium",
            typical_duration: "1-3 days",
            treatment: "Hydration and rest; care escalation if symptoms persist",
        },
    ),
    (
        "Hypertension",
        DiseaseInfo {
            description: "High blood pressure that can lead to serious health complications if left untreated.",
            severity: "Medium",
            typical_duration: "Chronic",
            treatment: "Regular monitoring and management with a healthcare provider",
        },
    ),
    (
        "Allergic Reaction",
        DiseaseInfo {
            description: "An immune system response to a substance that the body perceives as harmful.",
            severity: "Low",
            typical_duration: "Hours to days",
            treatment: "Trigger avoidance and guidance from a healthcare provider",
        },
    ),
    (
        "Urinary Tract Infection",
        DiseaseInfo {
            description: "A bacterial infection affecting any part of the urinary system.",
            severity: "Medium",
            typical_duration: "Several days with care",
            treatment: "Evaluation and treatment by a healthcare provider",
        },
    ),
];

const UNKNOWN_DISEASE_INFO: DiseaseInfo = DiseaseInfo {
    description: "A medical condition that requires professional evaluation.",
    severity: "Unknown",
    typical_duration: "Varies",
    treatment: "Consult healthcare provider",
};

/// Look up reference information for a disease; unknown names get a generic
/// consult-a-provider entry rather than an error.
pub fn disease_info(name: &str) -> DiseaseInfo {
    DISEASE_INFO
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, info)| *info)
        .unwrap_or(UNKNOWN_DISEASE_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_symptom_is_in_vocabulary() {
        for rule in DISEASE_RULES {
            for symptom in rule.symptoms {
                assert!(
                    crate::vocabulary::SYMPTOM_VOCABULARY.contains(symptom),
                    "{} lists unknown symptom {}",
                    rule.name,
                    symptom
                );
            }
        }
    }

    #[test]
    fn base_probabilities_within_range() {
        for rule in DISEASE_RULES {
            assert!(rule.base_probability > 0.0 && rule.base_probability <= 100.0);
        }
    }

    #[test]
    fn known_disease_info() {
        let info = disease_info("Flu");
        assert!(info.description.contains("respiratory"));
        assert_eq!(info.severity, "Medium");
    }

    #[test]
    fn unknown_disease_gets_default_info() {
        let info = disease_info("Nonexistent");
        assert_eq!(info.severity, "Unknown");
        assert_eq!(info.treatment, "Consult healthcare provider");
    }
}
