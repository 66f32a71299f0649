//! Image-description scoring against the condition knowledge base.

use crate::knowledge::{
    condition_keywords, ConditionProfile, ALWAYS_HIGH_SEVERITY, CONDITION_PROFILES,
    MODERATE_INDICATORS, SEVERE_INDICATORS,
};
use crate::models::{rank_descending, round_score, Prediction, Severity};

/// Weight of the visual-characteristic overlap component.
const CHARACTERISTIC_WEIGHT: f64 = 0.4;
/// Weight of the body-location overlap component.
const LOCATION_WEIGHT: f64 = 0.3;
/// Bonus for a condition whose keyword group matches the description.
const KEYWORD_BONUS: f64 = 0.1;
/// Minimum combined score (0..1) for a condition to be reported.
const CONFIDENCE_THRESHOLD: f64 = 0.3;
/// Number of conditions reported per description.
const TOP_CONDITIONS: usize = 3;

/// Score all known conditions against a free-text image description and an
/// optional body location. Returns at most three predictions, confidence
/// descending, each above the 30% floor.
pub fn analyze_image_description(description: &str, location: Option<&str>) -> Vec<Prediction> {
    let description_lower = description.to_lowercase();
    let location_lower = location.map(|l| l.to_lowercase());

    let mut predictions = Vec::new();

    for profile in CONDITION_PROFILES {
        let (score, matched) = score_condition(profile, &description_lower, location_lower.as_deref());

        if score > CONFIDENCE_THRESHOLD {
            let confidence = round_score(score * 100.0);
            let severity = determine_severity(profile.name, &description_lower);
            predictions.push(
                Prediction {
                    name: profile.name.to_string(),
                    probability: confidence,
                    confidence,
                    matching_symptoms: matched,
                    severity: Some(severity),
                    urgency: Some(profile.urgency),
                    cnn_derived: false,
                    note: None,
                },
            );
        }
    }

    rank_descending(&mut predictions);
    predictions.truncate(TOP_CONDITIONS);
    predictions
}

/// Weighted overlap score for one condition, clamped to [0, 1], plus the
/// characteristic phrases that matched.
fn score_condition(
    profile: &ConditionProfile,
    description_lower: &str,
    location_lower: Option<&str>,
) -> (f64, Vec<String>) {
    let mut score = 0.0;

    let matched: Vec<String> = profile
        .visual_characteristics
        .iter()
        .filter(|c| description_lower.contains(*c))
        .map(|c| c.to_string())
        .collect();
    if !profile.visual_characteristics.is_empty() {
        score += CHARACTERISTIC_WEIGHT * matched.len() as f64
            / profile.visual_characteristics.len() as f64;
    }

    if let Some(loc) = location_lower {
        let location_hits = profile
            .common_locations
            .iter()
            .filter(|l| loc.contains(*l))
            .count();
        if !profile.common_locations.is_empty() {
            score += LOCATION_WEIGHT * location_hits as f64 / profile.common_locations.len() as f64;
        }
    }

    if let Some(keywords) = condition_keywords(profile.name) {
        if keywords.iter().any(|k| description_lower.contains(k)) {
            score += KEYWORD_BONUS;
        }
    }

    (score.clamp(0.0, 1.0), matched)
}

/// First-match severity for a condition given the description text.
pub fn determine_severity(condition: &str, description_lower: &str) -> Severity {
    if ALWAYS_HIGH_SEVERITY.contains(&condition) {
        return Severity::High;
    }
    if SEVERE_INDICATORS.iter().any(|i| description_lower.contains(i)) {
        return Severity::High;
    }
    if MODERATE_INDICATORS.iter().any(|i| description_lower.contains(i)) {
        return Severity::Medium;
    }
    Severity::Low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eczema_scenario_ranks_in_top_three() {
        let predictions = analyze_image_description(
            "red, itchy patches on hands with dry, scaling skin",
            Some("hands"),
        );

        assert!(!predictions.is_empty());
        assert!(predictions.len() <= 3);
        let eczema = predictions
            .iter()
            .find(|p| p.name == "Eczema")
            .expect("Eczema should be in top 3");
        assert!(eczema.confidence > 30.0);
        assert!(eczema.matching_symptoms.contains(&"red".to_string()));
    }

    #[test]
    fn predictions_sorted_descending() {
        let predictions = analyze_image_description(
            "red, itchy, raised welts and patches with swelling and dry, scaling skin",
            None,
        );
        assert!(predictions.len() >= 2);
        for pair in predictions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn weak_description_yields_nothing() {
        let predictions = analyze_image_description("a photo of skin", None);
        assert!(predictions.is_empty());
    }

    #[test]
    fn location_contributes_only_when_supplied() {
        let with_location = analyze_image_description(
            "red, itchy patches with dry, scaling skin",
            Some("hands and elbows"),
        );
        let without_location =
            analyze_image_description("red, itchy patches with dry, scaling skin", None);

        let conf = |preds: &[Prediction]| {
            preds
                .iter()
                .find(|p| p.name == "Eczema")
                .map(|p| p.confidence)
                .unwrap_or(0.0)
        };
        assert!(conf(&with_location) > conf(&without_location));
    }

    // ── severity ─────────────────────────────────────────────

    #[test]
    fn melanoma_is_always_high_severity() {
        assert_eq!(determine_severity("Melanoma", "small faint spot"), Severity::High);
        assert_eq!(
            determine_severity("Diabetic_Foot_Ulcer", "minor mark"),
            Severity::High
        );
    }

    #[test]
    fn severe_indicator_beats_moderate() {
        // Both "bleeding" (severe) and "painful" (moderate) present.
        assert_eq!(
            determine_severity("Eczema", "painful, bleeding patch"),
            Severity::High
        );
    }

    #[test]
    fn moderate_indicator_yields_medium() {
        assert_eq!(
            determine_severity("Eczema", "painful dry patch"),
            Severity::Medium
        );
    }

    #[test]
    fn no_indicator_yields_low() {
        assert_eq!(determine_severity("Eczema", "dry patch"), Severity::Low);
    }
}
