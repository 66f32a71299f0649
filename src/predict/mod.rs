//! Symptom-based disease scoring.
//!
//! Two interchangeable strategies produce the same `Prediction` shape: a
//! dataset-driven overlap score when a reference dataset was loaded, and a
//! weighted rule-coverage score otherwise. The strategy is fixed at
//! construction time.

pub mod recommend;

use std::collections::BTreeSet;

use crate::knowledge::{DatasetRecord, DISEASE_RULES};
use crate::models::{rank_descending, round_score, Prediction};
use crate::vocabulary::{self, SYMPTOM_VOCABULARY};

/// Dataset-strategy probability ceiling.
const DATASET_PROBABILITY_CAP: f64 = 95.0;
/// Dataset-strategy inclusion threshold.
const DATASET_MIN_PROBABILITY: f64 = 10.0;
/// Rule-strategy probability ceiling.
const RULE_PROBABILITY_CAP: f64 = 90.0;
/// Rule-strategy inclusion threshold.
const RULE_MIN_PROBABILITY: f64 = 15.0;

/// How a `SymptomPredictor` turns symptoms into ranked diseases.
enum Strategy {
    /// Precision/recall overlap against loaded dataset rows.
    Dataset(Vec<DatasetRecord>),
    /// Weighted coverage against the static rule table.
    Rules,
}

/// Symptom-to-disease scorer. Construct once, share read-only.
pub struct SymptomPredictor {
    strategy: Strategy,
}

impl SymptomPredictor {
    /// Build a predictor, selecting the dataset strategy when rows are
    /// available and falling back to the rule table otherwise.
    pub fn new(dataset: Option<Vec<DatasetRecord>>) -> Self {
        match dataset {
            Some(records) if !records.is_empty() => {
                tracing::info!(diseases = records.len(), "Disease scorer using reference dataset");
                Self {
                    strategy: Strategy::Dataset(records),
                }
            }
            _ => {
                tracing::info!(
                    rules = DISEASE_RULES.len(),
                    "Reference dataset unavailable, disease scorer using rule table"
                );
                Self {
                    strategy: Strategy::Rules,
                }
            }
        }
    }

    /// Rule-table predictor, for callers that never load a dataset.
    pub fn from_rules() -> Self {
        Self {
            strategy: Strategy::Rules,
        }
    }

    /// Rank candidate diseases for the given free-text symptoms.
    ///
    /// Empty input returns an empty list. Non-empty input that matches
    /// nothing in the vocabulary returns a single general-consultation
    /// placeholder, never an empty list.
    pub fn predict_diseases(&self, symptoms: &[String], top_n: usize) -> Vec<Prediction> {
        if symptoms.is_empty() {
            return Vec::new();
        }

        let matched = vocabulary::match_tokens(symptoms, SYMPTOM_VOCABULARY);
        if matched.is_empty() {
            tracing::debug!(input = symptoms.len(), "No symptoms matched vocabulary");
            return vec![fallback_prediction(symptoms)];
        }

        let mut predictions = match &self.strategy {
            Strategy::Dataset(records) => predict_with_dataset(&matched, records),
            Strategy::Rules => predict_with_rules(&matched),
        };

        rank_descending(&mut predictions);
        predictions.truncate(top_n);
        predictions
    }
}

/// Harmonic-mean overlap score per dataset row.
fn predict_with_dataset(matched: &BTreeSet<String>, records: &[DatasetRecord]) -> Vec<Prediction> {
    let mut predictions = Vec::new();

    for record in records {
        let overlap: Vec<String> = record
            .symptoms
            .iter()
            .filter(|s| matched.contains(*s))
            .cloned()
            .collect();
        let m = overlap.len();
        if m == 0 {
            continue;
        }

        let precision = if matched.is_empty() {
            0.0
        } else {
            m as f64 / matched.len() as f64
        };
        let recall = if record.symptoms.is_empty() {
            0.0
        } else {
            m as f64 / record.symptoms.len() as f64
        };

        let harmonic = if precision + recall > 0.0 {
            (2.0 * precision * recall) / (precision + recall)
        } else {
            0.0
        };
        let probability = (harmonic * 100.0).min(DATASET_PROBABILITY_CAP);

        if probability > DATASET_MIN_PROBABILITY {
            let confidence = ((m * 20) as f64).min(90.0);
            predictions.push(
                Prediction::new(record.disease.clone(), round_score(probability), confidence)
                    .with_matches(overlap),
            );
        }
    }

    predictions
}

/// Weighted rule-coverage score.
fn predict_with_rules(matched: &BTreeSet<String>) -> Vec<Prediction> {
    let mut predictions = Vec::new();

    for rule in DISEASE_RULES {
        let overlap: Vec<String> = rule
            .symptoms
            .iter()
            .filter(|s| matched.contains(**s))
            .map(|s| s.to_string())
            .collect();
        if overlap.is_empty() {
            continue;
        }

        let match_ratio = overlap.len() as f64 / rule.symptoms.len() as f64;
        let probability = (rule.base_probability * match_ratio).min(RULE_PROBABILITY_CAP);

        if probability > RULE_MIN_PROBABILITY {
            let confidence = ((overlap.len() * 25) as f64).min(85.0);
            predictions.push(
                Prediction::new(rule.name, round_score(probability), confidence)
                    .with_matches(overlap),
            );
        }
    }

    predictions
}

/// Placeholder for input that matched nothing. Carries the raw symptoms so
/// the caller can see what failed to resolve.
fn fallback_prediction(symptoms: &[String]) -> Prediction {
    Prediction::new("General Consultation Recommended", 50.0, 30.0)
        .with_matches(symptoms.to_vec())
        .with_note(
            "Symptoms do not match common patterns. Professional medical consultation recommended.",
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    // ── strategy selection ───────────────────────────────────

    #[test]
    fn empty_dataset_falls_back_to_rules() {
        let predictor = SymptomPredictor::new(Some(Vec::new()));
        assert!(matches!(predictor.strategy, Strategy::Rules));
    }

    #[test]
    fn dataset_rows_select_dataset_strategy() {
        let rows = vec![DatasetRecord::new("Flu", &["fever", "cough"])];
        let predictor = SymptomPredictor::new(Some(rows));
        assert!(matches!(predictor.strategy, Strategy::Dataset(_)));
    }

    // ── rule strategy ────────────────────────────────────────

    #[test]
    fn flu_scenario_ranks_flu_with_bounded_probability() {
        let predictor = SymptomPredictor::from_rules();
        let predictions =
            predictor.predict_diseases(&owned(&["fever", "headache", "muscle pain", "fatigue"]), 5);

        let flu = predictions
            .iter()
            .find(|p| p.name == "Flu")
            .expect("Flu should be predicted");
        assert!(!flu.matching_symptoms.is_empty());
        assert!(flu.probability <= 90.0);
        assert!(flu.matching_symptoms.contains(&"muscle_pain".to_string()));
    }

    #[test]
    fn rule_predictions_sorted_descending_within_cap() {
        let predictor = SymptomPredictor::from_rules();
        let predictions = predictor.predict_diseases(
            &owned(&["nausea", "vomiting", "diarrhoea", "abdominal pain", "fever"]),
            5,
        );

        assert!(!predictions.is_empty());
        assert_eq!(predictions[0].name, "Gastroenteritis");
        for pair in predictions.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        for p in &predictions {
            assert!(p.probability > 0.0 && p.probability <= 90.0);
            assert!(p.confidence <= 85.0);
        }
    }

    #[test]
    fn low_coverage_rules_are_excluded() {
        let predictor = SymptomPredictor::from_rules();
        // One of six Common Cold symptoms: 70 * 1/6 = 11.7, below the rule floor.
        let predictions = predictor.predict_diseases(&owned(&["sneezing"]), 5);
        assert!(predictions.iter().all(|p| p.name != "Common Cold"));
    }

    // ── dataset strategy ─────────────────────────────────────

    #[test]
    fn dataset_probability_is_harmonic_mean_capped() {
        let rows = vec![
            DatasetRecord::new("Flu", &["fever", "headache", "fatigue"]),
            DatasetRecord::new("Migraine", &["headache", "nausea"]),
        ];
        let predictor = SymptomPredictor::new(Some(rows));
        let predictions = predictor.predict_diseases(&owned(&["fever", "headache", "fatigue"]), 5);

        let flu = predictions.iter().find(|p| p.name == "Flu").unwrap();
        // Perfect overlap: precision = recall = 1 → capped at 95.
        assert_eq!(flu.probability, 95.0);
        assert_eq!(flu.confidence, 60.0);

        let migraine = predictions.iter().find(|p| p.name == "Migraine").unwrap();
        // P = 1/3, R = 1/2 → F = 0.4 → 40.0
        assert_eq!(migraine.probability, 40.0);
    }

    #[test]
    fn dataset_confidence_caps_at_90() {
        let symptoms = [
            "fever", "headache", "fatigue", "cough", "chills", "nausea",
        ];
        let rows = vec![DatasetRecord::new("Flu", &symptoms)];
        let predictor = SymptomPredictor::new(Some(rows));
        let predictions = predictor.predict_diseases(&owned(&symptoms), 5);
        assert_eq!(predictions[0].confidence, 90.0);
    }

    #[test]
    fn dataset_predictions_within_cap() {
        let rows = vec![DatasetRecord::new("Flu", &["fever"])];
        let predictor = SymptomPredictor::new(Some(rows));
        for p in predictor.predict_diseases(&owned(&["fever"]), 5) {
            assert!(p.probability >= 0.0 && p.probability <= 95.0);
        }
    }

    // ── fallback + edge cases ────────────────────────────────

    #[test]
    fn empty_input_returns_empty_list() {
        let predictor = SymptomPredictor::from_rules();
        assert!(predictor.predict_diseases(&[], 5).is_empty());
    }

    #[test]
    fn unmatched_input_returns_placeholder_not_empty() {
        let predictor = SymptomPredictor::from_rules();
        let predictions = predictor.predict_diseases(&owned(&["zzzz", "qqqq"]), 5);

        assert_eq!(predictions.len(), 1);
        let p = &predictions[0];
        assert_eq!(p.name, "General Consultation Recommended");
        assert_eq!(p.probability, 50.0);
        assert_eq!(p.confidence, 30.0);
        assert_eq!(p.matching_symptoms, owned(&["zzzz", "qqqq"]));
        assert!(p.note.is_some());
    }

    #[test]
    fn top_n_truncates() {
        let predictor = SymptomPredictor::from_rules();
        let predictions = predictor.predict_diseases(
            &owned(&["fever", "headache", "nausea", "vomiting", "skin rash", "itching"]),
            2,
        );
        assert!(predictions.len() <= 2);
    }
}
