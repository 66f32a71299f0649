use serde::{Deserialize, Serialize};

use super::ExternalServiceError;
use crate::models::{round_score, Prediction};

/// Class labels for the binary skin classifier.
pub static BINARY_CLASS_LABELS: &[&str] = &["Normal(Healthy skin)", "Abnormal(Ulcer)"];

/// A decoded image sized to the classifier's declared input shape, channel
/// values normalized to [0, 1].
#[derive(Debug, Clone)]
pub struct ImageTensor {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub data: Vec<f32>,
}

impl ImageTensor {
    /// Build a tensor, validating that the buffer matches the dimensions.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, ExternalServiceError> {
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(ExternalServiceError::ModelOutput(format!(
                "Image buffer has {} values, expected {expected} for {height}x{width}x{channels}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }
}

/// The neural image classifier, consumed as a black box. Implementations run
/// inference and return raw per-class scores; interpretation happens here.
pub trait ImageClassifier {
    /// Declared input shape as (height, width, channels).
    fn input_shape(&self) -> (usize, usize, usize);

    /// Run inference, returning raw output scores.
    fn run(&self, image: &ImageTensor) -> Result<Vec<f32>, ExternalServiceError>;

    /// Class labels in output order.
    fn class_labels(&self) -> &[&str] {
        BINARY_CLASS_LABELS
    }
}

/// A classifier verdict: one label and its confidence in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    /// Lift the verdict into the common prediction shape (confidence × 100).
    pub fn into_prediction(self) -> Prediction {
        let score = round_score(f64::from(self.confidence) * 100.0);
        Prediction::new(self.label, score, score)
    }
}

/// Classify an image and interpret the raw output uniformly across sigmoid,
/// binary, and multiclass response shapes.
pub fn classify(
    classifier: &dyn ImageClassifier,
    image: &ImageTensor,
) -> Result<Classification, ExternalServiceError> {
    let scores = classifier.run(image)?;
    interpret_scores(&scores, classifier.class_labels())
}

/// Turn raw model scores into a labelled verdict.
///
/// - 1 output: sigmoid — above 0.5 is the second label at that confidence,
///   otherwise the first label at the inverted confidence.
/// - 2 outputs: binary argmax.
/// - N outputs: multiclass argmax; indexes past the label list synthesize a
///   `Class_{i}` label.
pub fn interpret_scores(
    scores: &[f32],
    labels: &[&str],
) -> Result<Classification, ExternalServiceError> {
    if scores.is_empty() {
        return Err(ExternalServiceError::ModelOutput(
            "Classifier returned no scores".into(),
        ));
    }

    if scores.len() == 1 {
        if labels.len() < 2 {
            return Err(ExternalServiceError::ModelOutput(
                "Sigmoid output needs two class labels".into(),
            ));
        }
        let raw = scores[0];
        let (label, confidence) = if raw > 0.5 {
            (labels[1], raw)
        } else {
            (labels[0], 1.0 - raw)
        };
        return Ok(Classification {
            label: label.to_string(),
            confidence,
        });
    }

    let (index, best) = scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .expect("non-empty scores");

    let label = labels
        .get(index)
        .map(|l| l.to_string())
        .unwrap_or_else(|| format!("Class_{index}"));

    Ok(Classification {
        label,
        confidence: *best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier {
        scores: Vec<f32>,
    }

    impl ImageClassifier for FixedClassifier {
        fn input_shape(&self) -> (usize, usize, usize) {
            (224, 224, 3)
        }

        fn run(&self, _image: &ImageTensor) -> Result<Vec<f32>, ExternalServiceError> {
            Ok(self.scores.clone())
        }
    }

    fn tiny_image() -> ImageTensor {
        ImageTensor::new(1, 1, 3, vec![0.5, 0.5, 0.5]).unwrap()
    }

    // ── tensor validation ────────────────────────────────────

    #[test]
    fn tensor_rejects_mismatched_buffer() {
        let err = ImageTensor::new(2, 2, 3, vec![0.0; 5]).unwrap_err();
        assert!(matches!(err, ExternalServiceError::ModelOutput(_)));
    }

    // ── output interpretation ────────────────────────────────

    #[test]
    fn sigmoid_above_half_is_abnormal() {
        let c = interpret_scores(&[0.9], BINARY_CLASS_LABELS).unwrap();
        assert_eq!(c.label, "Abnormal(Ulcer)");
        assert!((c.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn sigmoid_below_half_inverts_confidence() {
        let c = interpret_scores(&[0.2], BINARY_CLASS_LABELS).unwrap();
        assert_eq!(c.label, "Normal(Healthy skin)");
        assert!((c.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn binary_output_takes_argmax() {
        let c = interpret_scores(&[0.3, 0.7], BINARY_CLASS_LABELS).unwrap();
        assert_eq!(c.label, "Abnormal(Ulcer)");
        assert!((c.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn multiclass_output_takes_argmax() {
        let labels = ["Normal(Healthy skin)", "Abnormal(Ulcer)", "Other"];
        let c = interpret_scores(&[0.1, 0.2, 0.7], &labels).unwrap();
        assert_eq!(c.label, "Other");
    }

    #[test]
    fn out_of_range_index_synthesizes_label() {
        let c = interpret_scores(&[0.1, 0.2, 0.3, 0.4], BINARY_CLASS_LABELS).unwrap();
        assert_eq!(c.label, "Class_3");
    }

    #[test]
    fn empty_output_is_an_error() {
        assert!(interpret_scores(&[], BINARY_CLASS_LABELS).is_err());
    }

    // ── end-to-end trait path ────────────────────────────────

    #[test]
    fn classify_runs_and_interprets() {
        let classifier = FixedClassifier {
            scores: vec![0.15, 0.85],
        };
        let c = classify(&classifier, &tiny_image()).unwrap();
        assert_eq!(c.label, "Abnormal(Ulcer)");
    }

    #[test]
    fn classification_lifts_to_prediction_scale() {
        let p = Classification {
            label: "Abnormal(Ulcer)".into(),
            confidence: 0.856,
        }
        .into_prediction();
        assert_eq!(p.probability, 85.6);
        assert_eq!(p.confidence, 85.6);
    }
}
