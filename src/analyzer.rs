//! Public facade tying the scoring components together.
//!
//! Every outward operation returns a structured result with a success flag;
//! on failure the reason is human-readable and list fields default to empty.
//! All recommendation text passes through the content filter on the way out.

use chrono::Utc;
use uuid::Uuid;

use crate::config;
use crate::emergency;
use crate::external::{self, ImageClassifier, ImageTensor};
use crate::insights;
use crate::knowledge::{condition_profile, disease_info, DatasetRecord};
use crate::models::{
    ConditionReport, EmergencyAssessment, HealthInsights, ImageAnalysis, PatientInfo, Prediction,
    RecommendationBundle, Severity, SymptomAnalysis, Urgency,
};
use crate::predict::{recommend, SymptomPredictor};
use crate::safety;
use crate::skin::{self, RiskScore};

/// Ceiling on the aggregated confidence reported for a symptom analysis.
const OVERALL_CONFIDENCE_CAP: f64 = 95.0;

/// The triage engine facade. Construct once and share; all methods are
/// read-only over static tables plus request-scoped input.
pub struct HealthAnalyzer {
    predictor: SymptomPredictor,
    classifier: Option<Box<dyn ImageClassifier + Send + Sync>>,
}

impl HealthAnalyzer {
    /// Rule-table analyzer with no image classifier attached.
    pub fn new() -> Self {
        Self {
            predictor: SymptomPredictor::from_rules(),
            classifier: None,
        }
    }

    /// Analyzer backed by a loaded reference dataset.
    pub fn with_dataset(records: Vec<DatasetRecord>) -> Self {
        Self {
            predictor: SymptomPredictor::new(Some(records)),
            classifier: None,
        }
    }

    /// Attach a neural image classifier.
    pub fn with_classifier(
        mut self,
        classifier: Box<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Ranked disease candidates for free-text symptoms.
    pub fn predict_diseases(&self, symptoms: &[String], top_n: usize) -> Vec<Prediction> {
        self.predictor.predict_diseases(symptoms, top_n)
    }

    /// Filtered recommendation bundle for a prediction list.
    pub fn get_recommendations(&self, predictions: &[Prediction]) -> RecommendationBundle {
        safety::filter_bundle(&recommend::get_recommendations(predictions))
    }

    /// Full symptom analysis: predictions, per-condition reports, filtered
    /// recommendations, and an aggregate confidence.
    pub fn analyze_symptoms(&self, symptoms: &[String]) -> SymptomAnalysis {
        let predictions = self.predict_diseases(symptoms, config::DEFAULT_TOP_N);
        let recommendations = self.get_recommendations(&predictions);

        let conditions: Vec<ConditionReport> = predictions
            .iter()
            .map(|p| ConditionReport {
                name: p.name.clone(),
                probability: p.probability,
                confidence: p.confidence,
                description: disease_info(&p.name).description.to_string(),
                severity: severity_for_urgency(recommendations.urgency),
                recommendations: recommendations.actions.clone(),
            })
            .collect();

        let overall_confidence = if predictions.is_empty() {
            0.0
        } else {
            let mean = predictions.iter().map(|p| p.probability).sum::<f64>()
                / predictions.len() as f64;
            mean.min(OVERALL_CONFIDENCE_CAP)
        };

        SymptomAnalysis {
            success: true,
            error: None,
            analysis_id: Uuid::new_v4(),
            conditions,
            recommendations,
            overall_confidence,
            timestamp: Utc::now(),
        }
    }

    /// Description-only image scoring.
    pub fn analyze_image_description(
        &self,
        description: &str,
        location: Option<&str>,
    ) -> Vec<Prediction> {
        skin::analyze_image_description(description, location)
    }

    /// Full image analysis: description scoring, fusion with the attached
    /// classifier when an image is supplied, and automatic ABCD assessment
    /// for mole-like predictions.
    ///
    /// A classifier failure is reported as a failed analysis, never folded
    /// into a neutral prediction.
    pub fn analyze_image(
        &self,
        description: &str,
        location: Option<&str>,
        image: Option<&ImageTensor>,
    ) -> ImageAnalysis {
        let mut conditions = skin::analyze_image_description(description, location);

        if let (Some(classifier), Some(image)) = (&self.classifier, image) {
            match external::classify(classifier.as_ref(), image) {
                Ok(classification) => {
                    let cnn = vec![classification.into_prediction()];
                    conditions = skin::combine_predictions(&conditions, &cnn);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Image classifier failed");
                    return ImageAnalysis::failed(format!("Image classifier failed: {e}"));
                }
            }
        }

        let abcd_analysis = conditions
            .iter()
            .any(|p| p.name.to_lowercase().contains("mole"))
            .then(|| self.get_abcd_analysis(description));

        let recommendations = self.image_recommendations(&conditions);

        ImageAnalysis {
            success: true,
            error: None,
            analysis_id: Uuid::new_v4(),
            conditions,
            abcd_analysis,
            recommendations,
            timestamp: Utc::now(),
        }
    }

    /// ABCD mole-risk assessment with filtered recommendations.
    pub fn get_abcd_analysis(&self, description: &str) -> RiskScore {
        let mut score = skin::assess_abcd(description);
        score.recommendations = safety::filter_recommendations(&score.recommendations);
        score
    }

    /// Blend knowledge-base and classifier prediction lists.
    pub fn combine_predictions(
        &self,
        traditional: &[Prediction],
        cnn: &[Prediction],
    ) -> Vec<Prediction> {
        skin::combine_predictions(traditional, cnn)
    }

    /// Emergency scan of raw symptoms, recommendations filtered.
    pub fn assess_emergency(&self, symptoms: &[String]) -> EmergencyAssessment {
        let mut assessment = emergency::assess_emergency(symptoms);
        assessment.recommendations = safety::filter_recommendations(&assessment.recommendations);
        assessment
    }

    /// Educational insights from patient context, lists filtered.
    pub fn health_insights(&self, patient: &PatientInfo) -> HealthInsights {
        let mut insights = insights::build_insights(patient);
        insights.recommendations = safety::filter_recommendations(&insights.recommendations);
        insights.preventive_measures =
            safety::filter_recommendations(&insights.preventive_measures);
        insights
    }

    /// Treatment options for the top conditions plus urgency-level actions,
    /// all filtered.
    fn image_recommendations(&self, conditions: &[Prediction]) -> Vec<String> {
        let urgency = conditions
            .iter()
            .filter_map(|p| p.urgency)
            .fold(Urgency::Low, Urgency::max);

        let mut lines: Vec<String> = conditions
            .first()
            .and_then(|p| condition_profile(&p.name))
            .map(|profile| {
                profile
                    .treatment_options
                    .iter()
                    .map(|t| t.to_string())
                    .collect()
            })
            .unwrap_or_default();

        lines.extend(
            recommend::actions_for(urgency)
                .iter()
                .map(|a| a.to_string()),
        );

        safety::filter_recommendations(&lines)
    }
}

impl Default for HealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_for_urgency(urgency: Urgency) -> Severity {
    match urgency {
        Urgency::High => Severity::High,
        Urgency::Medium => Severity::Medium,
        Urgency::Low => Severity::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::ExternalServiceError;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    struct FailingClassifier;

    impl ImageClassifier for FailingClassifier {
        fn input_shape(&self) -> (usize, usize, usize) {
            (224, 224, 3)
        }

        fn run(&self, _image: &ImageTensor) -> Result<Vec<f32>, ExternalServiceError> {
            Err(ExternalServiceError::Timeout {
                service: "image classifier".into(),
                seconds: 30,
            })
        }
    }

    struct UlcerClassifier;

    impl ImageClassifier for UlcerClassifier {
        fn input_shape(&self) -> (usize, usize, usize) {
            (224, 224, 3)
        }

        fn run(&self, _image: &ImageTensor) -> Result<Vec<f32>, ExternalServiceError> {
            Ok(vec![0.1, 0.9])
        }
    }

    fn tiny_image() -> ImageTensor {
        ImageTensor::new(1, 1, 3, vec![0.2, 0.2, 0.2]).unwrap()
    }

    // ── symptom path ─────────────────────────────────────────

    #[test]
    fn analyze_symptoms_produces_ranked_conditions() {
        let analyzer = HealthAnalyzer::new();
        let analysis =
            analyzer.analyze_symptoms(&owned(&["fever", "headache", "muscle pain", "fatigue"]));

        assert!(analysis.success);
        assert!(analysis.error.is_none());
        assert!(!analysis.conditions.is_empty());
        assert!(analysis.overall_confidence > 0.0);
        assert!(analysis.overall_confidence <= 95.0);
        assert!(analysis.conditions.iter().any(|c| c.name == "Flu"));
    }

    #[test]
    fn analyze_symptoms_with_empty_input_succeeds_with_fallback_bundle() {
        let analyzer = HealthAnalyzer::new();
        let analysis = analyzer.analyze_symptoms(&[]);

        assert!(analysis.success);
        assert!(analysis.conditions.is_empty());
        assert_eq!(analysis.overall_confidence, 0.0);
        assert_eq!(analysis.recommendations.urgency, Urgency::Medium);
        assert!(!analysis.recommendations.actions.is_empty());
    }

    #[test]
    fn recommendations_are_filtered_on_the_way_out() {
        let analyzer = HealthAnalyzer::new();
        let analysis = analyzer.analyze_symptoms(&owned(&["fever", "cough"]));

        for line in analysis
            .recommendations
            .actions
            .iter()
            .chain(&analysis.recommendations.self_care)
            .chain(&analysis.recommendations.warning_signs)
        {
            let lower = line.to_lowercase();
            for term in safety::RESTRICTED_TERMS {
                assert!(!lower.contains(term), "'{line}' contains '{term}'");
            }
        }
    }

    // ── image path ───────────────────────────────────────────

    #[test]
    fn eczema_description_analysis_succeeds() {
        let analyzer = HealthAnalyzer::new();
        let analysis = analyzer.analyze_image(
            "red, itchy patches on hands with dry, scaling skin",
            Some("hands"),
            None,
        );

        assert!(analysis.success);
        assert!(analysis.conditions.iter().any(|c| c.name == "Eczema"));
        assert!(analysis.abcd_analysis.is_none());
        assert!(!analysis.recommendations.is_empty());
    }

    #[test]
    fn mole_prediction_triggers_abcd() {
        let analyzer = HealthAnalyzer::new();
        let analysis = analyzer.analyze_image(
            "dark raised mole with irregular shape, one half unlike the other",
            None,
            None,
        );

        assert!(analysis.success);
        assert!(analysis
            .conditions
            .iter()
            .any(|c| c.name.to_lowercase().contains("mole")));
        let abcd = analysis.abcd_analysis.expect("ABCD should run");
        assert_eq!(abcd.asymmetry, 1);
    }

    #[test]
    fn classifier_contribution_is_flagged() {
        let analyzer = HealthAnalyzer::new().with_classifier(Box::new(UlcerClassifier));
        let analysis = analyzer.analyze_image(
            "open wound on the sole with drainage and surrounding redness",
            Some("sole of the foot"),
            Some(&tiny_image()),
        );

        assert!(analysis.success);
        let ulcer = analysis
            .conditions
            .iter()
            .find(|c| c.name == "Abnormal(Ulcer)")
            .expect("classifier label should be present");
        assert!(ulcer.cnn_derived);
    }

    #[test]
    fn classifier_failure_is_reported_not_masked() {
        let analyzer = HealthAnalyzer::new().with_classifier(Box::new(FailingClassifier));
        let analysis = analyzer.analyze_image(
            "red, itchy patches with dry, scaling skin",
            None,
            Some(&tiny_image()),
        );

        assert!(!analysis.success);
        let reason = analysis.error.expect("failure reason");
        assert!(reason.contains("timed out"));
        assert!(analysis.conditions.is_empty());
    }

    #[test]
    fn classifier_is_skipped_without_an_image() {
        let analyzer = HealthAnalyzer::new().with_classifier(Box::new(FailingClassifier));
        let analysis =
            analyzer.analyze_image("red, itchy patches with dry, scaling skin", None, None);
        assert!(analysis.success);
    }

    // ── delegated operations ─────────────────────────────────

    #[test]
    fn abcd_analysis_recommendations_survive_filtering() {
        let analyzer = HealthAnalyzer::new();
        let score = analyzer.get_abcd_analysis("asymmetric mole with jagged border, growing");
        assert!(!score.recommendations.is_empty());
    }

    #[test]
    fn emergency_delegation_retains_risk_level() {
        let analyzer = HealthAnalyzer::new();
        let assessment = analyzer.assess_emergency(&owned(&["chest pain"]));
        assert_eq!(
            assessment.risk_level,
            crate::models::EmergencyRisk::Immediate
        );
    }
}
