//! Wire shapes for the CLI contract: exactly one JSON object on stdout per
//! invocation, success or failure, never both.

use serde::Serialize;

use crate::classifier::Prediction;

/// Successful classification, as printed to stdout.
#[derive(Debug, Serialize)]
pub struct PredictionReport {
    pub success: bool,
    #[serde(flatten)]
    pub prediction: Prediction,
    /// The model identifier the caller passed in.
    pub model: String,
    /// Character count of the raw input text.
    pub text_length: usize,
}

impl PredictionReport {
    pub fn new(prediction: Prediction, model: impl Into<String>, text: &str) -> Self {
        Self {
            success: true,
            prediction,
            model: model.into(),
            text_length: text.chars().count(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| FailureReport::new(format!("report serialization failed: {}", e)).to_json())
    }
}

/// Failed invocation, as printed to stdout. Carries nothing but the message:
/// no partial results.
#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
}

impl FailureReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":"report serialization failed"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction() -> Prediction {
        let labels: Vec<String> = ["sad", "happy"].iter().map(|s| s.to_string()).collect();
        Prediction::from_scores(vec![0.1, 0.9], &labels, 2).unwrap()
    }

    #[test]
    fn success_report_carries_all_fields() {
        let report = PredictionReport::new(sample_prediction(), "model.onnx", "I am happy");
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["emotion"], "happy");
        assert!((value["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert_eq!(value["model"], "model.onnx");
        assert_eq!(value["text_length"], 10);
        assert_eq!(value["tokens_used"], 2);
        assert_eq!(value["scores"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn text_length_counts_characters() {
        let report = PredictionReport::new(sample_prediction(), "m", "héllo");
        assert_eq!(report.text_length, 5);
    }

    #[test]
    fn failure_report_has_only_error() {
        let value: serde_json::Value =
            serde_json::from_str(&FailureReport::new("boom").to_json()).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
