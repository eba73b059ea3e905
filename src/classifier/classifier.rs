use log::debug;

use super::builder::ClassifierBuilder;
use super::error::{ClassifierError, Result};
use super::model::EmotionModel;
use super::prediction::Prediction;
use super::tokenizer::Tokenizer;
use super::ClassifierInfo;

/// A text emotion classifier: static-vocabulary tokenizer in front of an
/// injected inference backend, with a fixed label list.
///
/// # Thread Safety
///
/// Immutable after construction and `Send + Sync` (the backend trait requires
/// both), so one instance may serve predictions from many threads. Each
/// prediction is a plain synchronous call and nothing here needs more than
/// one thread.
pub struct EmotionClassifier {
    model_path: Option<String>,
    tokenizer: Tokenizer,
    model: Box<dyn EmotionModel>,
    labels: Vec<String>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<EmotionClassifier>();
    }
};

impl EmotionClassifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    pub(crate) fn new(
        model_path: Option<String>,
        tokenizer: Tokenizer,
        model: Box<dyn EmotionModel>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            model_path,
            tokenizer,
            model,
            labels,
        }
    }

    /// Classifies the emotion of `text`.
    ///
    /// Blank raw input is rejected before tokenization. Text that merely
    /// *normalizes* to empty (digits, punctuation) is not rejected: it encodes
    /// to an all-padding sequence and the model scores it like any other
    /// input, matching the reference pipeline.
    ///
    /// # Errors
    /// * `InvalidInput` if `text` is empty or whitespace-only
    /// * `Inference` if the backend fails
    /// * `LabelMismatch` if the model's class count disagrees with the label
    ///   list
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        if text.trim().is_empty() {
            return Err(ClassifierError::InvalidInput(
                "input text cannot be empty".to_string(),
            ));
        }

        let sequence = self.tokenizer.tokenize(text);
        debug!(
            "Encoded {} of {} tokens",
            sequence.tokens_used(),
            sequence.len()
        );

        let raw_scores = self.model.class_probabilities(&sequence)?;
        Prediction::from_scores(raw_scores, &self.labels, sequence.tokens_used())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            model_path: self.model_path.clone(),
            labels: self.labels.clone(),
            num_classes: self.labels.len(),
            vocabulary_size: self.tokenizer.vocabulary().len(),
            max_length: self.tokenizer.max_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tokenizer::TokenSequence;

    struct FixedScores(Vec<f32>);

    impl EmotionModel for FixedScores {
        fn class_probabilities(&self, _sequence: &TokenSequence) -> Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    struct FailingModel;

    impl EmotionModel for FailingModel {
        fn class_probabilities(&self, _sequence: &TokenSequence) -> Result<Vec<f32>> {
            Err(ClassifierError::Inference("backend exploded".to_string()))
        }
    }

    fn classifier_with(model: impl EmotionModel + 'static) -> EmotionClassifier {
        EmotionClassifier::builder().with_model(model).build().unwrap()
    }

    #[test]
    fn blank_text_is_rejected_before_tokenization() {
        let classifier = classifier_with(FixedScores(vec![1.0; 6]));
        for text in ["", "   ", "\t\n"] {
            let result = classifier.predict(text);
            assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
        }
    }

    #[test]
    fn digits_only_text_is_still_classified() {
        // Normalizes to empty, encodes to pure padding, and is scored anyway.
        let classifier = classifier_with(FixedScores(vec![0.9, 0.05, 0.02, 0.01, 0.01, 0.01]));
        let prediction = classifier.predict("12345").unwrap();
        assert_eq!(prediction.emotion, "angry");
        assert_eq!(prediction.tokens_used, 0);
    }

    #[test]
    fn backend_failures_surface_as_inference_errors() {
        let classifier = classifier_with(FailingModel);
        let err = classifier.predict("some text").unwrap_err();
        assert!(matches!(err, ClassifierError::Inference(_)));
        assert!(err.to_string().contains("backend exploded"));
    }

    #[test]
    fn class_count_mismatch_is_reported() {
        let classifier = classifier_with(FixedScores(vec![0.5, 0.5]));
        let result = classifier.predict("hello");
        assert!(matches!(
            result,
            Err(ClassifierError::LabelMismatch { scores: 2, labels: 6 })
        ));
    }

    #[test]
    fn info_reflects_configuration() {
        let classifier = classifier_with(FixedScores(vec![1.0; 6]));
        let info = classifier.info();
        assert_eq!(info.num_classes, 6);
        assert_eq!(info.max_length, 80);
        assert!(info.vocabulary_size > 0);
        assert!(info.model_path.is_none());
    }
}
