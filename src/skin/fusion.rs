//! Multi-source score fusion: blends prediction lists from heterogeneous
//! sources (rule/knowledge-base scoring, neural classifier, symptom-derived)
//! into one ranked list with fixed source weights.

use std::collections::BTreeMap;

use crate::models::{round_score, Prediction};

/// Fixed weight of knowledge-base scoring in the traditional+CNN blend.
pub const TRADITIONAL_WEIGHT: f64 = 0.3;
/// Fixed weight of the neural classifier in the traditional+CNN blend.
pub const CNN_WEIGHT: f64 = 0.7;
/// Fixed weight of image-derived predictions in the image+symptom blend.
pub const IMAGE_WEIGHT: f64 = 0.7;
/// Fixed weight of symptom-derived predictions in the image+symptom blend.
pub const SYMPTOM_WEIGHT: f64 = 0.3;

/// Maximum conditions reported from the traditional+CNN blend.
const FUSED_TOP_N: usize = 5;

/// Blend two prediction lists into per-condition combined scores.
///
/// The output covers the union of condition names; a condition missing from
/// one side contributes 0 for that side. Scores are rounded to one decimal.
pub fn fuse(
    a: &[Prediction],
    b: &[Prediction],
    weight_a: f64,
    weight_b: f64,
) -> BTreeMap<String, f64> {
    let mut combined = BTreeMap::new();

    for p in a {
        combined.insert(p.name.clone(), p.probability * weight_a);
    }
    for p in b {
        let entry = combined.entry(p.name.clone()).or_insert(0.0);
        *entry += p.probability * weight_b;
    }

    combined
        .into_iter()
        .map(|(name, score)| (name, round_score(score)))
        .collect()
}

/// Merge knowledge-base predictions with classifier predictions at the fixed
/// 0.3/0.7 weighting. Conditions present in the classifier list are flagged
/// as CNN-derived. Returns the top five, score descending, ties by name.
pub fn combine_predictions(traditional: &[Prediction], cnn: &[Prediction]) -> Vec<Prediction> {
    let fused = fuse(traditional, cnn, TRADITIONAL_WEIGHT, CNN_WEIGHT);

    let mut merged = rebuild_predictions(fused, traditional, cnn);
    merged.truncate(FUSED_TOP_N);
    merged
}

/// Merge image-derived predictions with symptom-derived predictions at the
/// fixed 0.7/0.3 weighting.
pub fn combine_image_and_symptoms(image: &[Prediction], symptom: &[Prediction]) -> Vec<Prediction> {
    let fused = fuse(image, symptom, IMAGE_WEIGHT, SYMPTOM_WEIGHT);
    rebuild_predictions(fused, image, symptom)
}

/// Turn fused scores back into predictions, carrying metadata from whichever
/// source knew the condition (first list preferred).
fn rebuild_predictions(
    fused: BTreeMap<String, f64>,
    primary: &[Prediction],
    secondary: &[Prediction],
) -> Vec<Prediction> {
    let mut merged: Vec<Prediction> = fused
        .into_iter()
        .map(|(name, score)| {
            let source = primary
                .iter()
                .find(|p| p.name == name)
                .or_else(|| secondary.iter().find(|p| p.name == name));
            let in_secondary = secondary.iter().any(|p| p.name == name);

            let mut prediction = match source {
                Some(p) => p.clone(),
                None => Prediction::new(name.clone(), 0.0, 0.0),
            };
            prediction.probability = score;
            prediction.confidence = score;
            prediction.cnn_derived = prediction.cnn_derived || in_secondary;
            prediction
        })
        .collect();

    merged.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(name: &str, score: f64) -> Prediction {
        Prediction::new(name, score, score)
    }

    #[test]
    fn fuse_blends_union_with_weights() {
        let a = vec![prediction("Eczema", 60.0), prediction("Psoriasis", 40.0)];
        let b = vec![prediction("Eczema", 80.0), prediction("Melanoma", 50.0)];

        let fused = fuse(&a, &b, 0.3, 0.7);
        assert_eq!(fused.len(), 3);
        // 60*0.3 + 80*0.7 = 74.0
        assert_eq!(fused["Eczema"], 74.0);
        // Missing side contributes zero.
        assert_eq!(fused["Psoriasis"], 12.0);
        assert_eq!(fused["Melanoma"], 35.0);
    }

    #[test]
    fn fuse_with_empty_second_source_scales_first_only() {
        let a = vec![
            prediction("Eczema", 60.0),
            prediction("Psoriasis", 60.0),
            prediction("Acne", 20.0),
        ];
        let fused = fuse(&a, &[], 0.5, 0.5);
        assert_eq!(fused["Eczema"], 30.0);
        assert_eq!(fused["Psoriasis"], 30.0);
        assert_eq!(fused["Acne"], 10.0);
    }

    #[test]
    fn combine_ranks_and_breaks_ties_by_name() {
        let a = vec![prediction("Psoriasis", 60.0), prediction("Eczema", 60.0)];
        let merged = combine_predictions(&a, &[]);
        // Equal scores: lexicographic order.
        assert_eq!(merged[0].name, "Eczema");
        assert_eq!(merged[1].name, "Psoriasis");
        assert_eq!(merged[0].probability, 18.0);
    }

    #[test]
    fn combine_flags_cnn_derived_conditions() {
        let traditional = vec![prediction("Eczema", 60.0)];
        let cnn = vec![prediction("Eczema", 80.0), prediction("Melanoma", 90.0)];

        let merged = combine_predictions(&traditional, &cnn);
        let eczema = merged.iter().find(|p| p.name == "Eczema").unwrap();
        let melanoma = merged.iter().find(|p| p.name == "Melanoma").unwrap();
        assert!(eczema.cnn_derived);
        assert!(melanoma.cnn_derived);
        assert_eq!(melanoma.probability, 63.0);
    }

    #[test]
    fn combine_truncates_to_five() {
        let many: Vec<Prediction> = (0..8)
            .map(|i| prediction(&format!("Condition{i}"), 80.0 - i as f64))
            .collect();
        let merged = combine_predictions(&many, &[]);
        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn image_symptom_blend_uses_point_seven_point_three() {
        let image = vec![prediction("Eczema", 50.0)];
        let symptom = vec![prediction("Eczema", 30.0)];
        let merged = combine_image_and_symptoms(&image, &symptom);
        // 50*0.7 + 30*0.3 = 44.0
        assert_eq!(merged[0].probability, 44.0);
    }

    #[test]
    fn scores_round_to_one_decimal() {
        let a = vec![prediction("Eczema", 33.3)];
        let b = vec![prediction("Eczema", 66.7)];
        let fused = fuse(&a, &b, 0.3, 0.7);
        // 9.99 + 46.69 = 56.68 → 56.7
        assert_eq!(fused["Eczema"], 56.7);
    }

    #[test]
    fn metadata_survives_fusion() {
        let traditional = vec![Prediction::new("Eczema", 60.0, 60.0)
            .with_matches(vec!["red".into()])
            .with_severity(crate::models::Severity::Medium)];
        let merged = combine_predictions(&traditional, &[]);
        assert_eq!(merged[0].matching_symptoms, vec!["red".to_string()]);
        assert_eq!(merged[0].severity, Some(crate::models::Severity::Medium));
        assert!(!merged[0].cnn_derived);
    }
}
