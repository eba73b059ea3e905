use std::path::Path;
use std::sync::Arc;

use log::info;

use super::classifier::EmotionClassifier;
use super::error::{ClassifierError, Result};
use super::model::{EmotionModel, OnnxModel};
use super::tokenizer::{Tokenizer, DEFAULT_MAX_LENGTH};
use crate::labels::{resolve_labels, validate_labels};
use crate::runtime::RuntimeConfig;
use crate::vocabulary::Vocabulary;

/// A builder for constructing an [`EmotionClassifier`] with a fluent
/// interface.
///
/// Everything except the model has a default: the built-in vocabulary, a
/// sequence length of [`DEFAULT_MAX_LENGTH`], and labels resolved from the
/// model's metadata hint or the static default table.
#[derive(Default)]
pub struct ClassifierBuilder {
    model: Option<Box<dyn EmotionModel>>,
    model_path: Option<String>,
    vocabulary: Option<Arc<Vocabulary>>,
    labels: Option<Vec<String>>,
    max_length: Option<usize>,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default
    /// configuration
    ///
    /// # Example
    /// ```
    /// use amygdala::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime configuration used when loading an ONNX model file.
    /// Has no effect on models injected via [`with_model`](Self::with_model).
    ///
    /// # Arguments
    /// * `config` - Settings for ONNX Runtime session execution
    ///
    /// # Example
    /// ```
    /// use amygdala::{ClassifierBuilder, RuntimeConfig};
    ///
    /// let config = RuntimeConfig::default();
    /// let builder = ClassifierBuilder::new()
    ///     .with_runtime_config(config);
    /// ```
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads an ONNX model file as the inference backend.
    ///
    /// # Arguments
    /// * `path` - Path to the ONNX model file
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful,
    ///   or an error if:
    ///   - A model was already set
    ///   - The file is missing or cannot be loaded
    ///   - The model's signature cannot accept token sequences
    ///
    /// # Example
    /// ```no_run
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use std::path::Path;
    /// use amygdala::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_model_file(Path::new("models/emotion_bilstm.onnx"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_model_file(mut self, path: &Path) -> Result<Self> {
        if self.model.is_some() {
            return Err(ClassifierError::Config("model already set".to_string()));
        }
        let model = OnnxModel::load(path, &self.runtime_config)?;
        self.model = Some(Box::new(model));
        self.model_path = Some(path.display().to_string());
        Ok(self)
    }

    /// Injects an inference backend directly. This is the seam used by tests
    /// and by hosts that execute models through something other than ONNX
    /// Runtime.
    ///
    /// # Arguments
    /// * `model` - Any [`EmotionModel`] implementation
    ///
    /// # Example
    /// ```
    /// use amygdala::{ClassifierBuilder, ClassifierError, EmotionModel, TokenSequence};
    ///
    /// struct Uniform(usize);
    ///
    /// impl EmotionModel for Uniform {
    ///     fn class_probabilities(&self, _: &TokenSequence) -> Result<Vec<f32>, ClassifierError> {
    ///         Ok(vec![1.0 / self.0 as f32; self.0])
    ///     }
    /// }
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_model(Uniform(6));
    /// ```
    pub fn with_model(mut self, model: impl EmotionModel + 'static) -> Self {
        self.model = Some(Box::new(model));
        self
    }

    /// Uses an explicit vocabulary instead of the built-in table.
    ///
    /// # Arguments
    /// * `vocabulary` - The word-to-index table to tokenize with
    ///
    /// # Example
    /// ```
    /// use amygdala::{ClassifierBuilder, Vocabulary};
    ///
    /// let vocabulary = Vocabulary::from_words(["happy", "sad"]);
    /// let builder = ClassifierBuilder::new()
    ///     .with_vocabulary(vocabulary);
    /// ```
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(Arc::new(vocabulary));
        self
    }

    /// Loads the vocabulary from a `vocab.json` file, the word-to-index map
    /// exported by the model's training pipeline.
    ///
    /// # Arguments
    /// * `path` - Path to the vocabulary JSON file
    ///
    /// # Example
    /// ```no_run
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use std::path::Path;
    /// use amygdala::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_vocabulary_file(Path::new("models/vocab.json"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_vocabulary_file(mut self, path: &Path) -> Result<Self> {
        self.vocabulary = Some(Arc::new(Vocabulary::from_file(path)?));
        Ok(self)
    }

    /// Sets the label list explicitly, in model output order. Explicit labels
    /// take precedence over any hint the model advertises.
    ///
    /// # Arguments
    /// * `labels` - One label per model output class
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful,
    ///   or `InvalidInput` if the list is empty or contains blank or duplicate
    ///   entries
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use amygdala::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_labels(vec![
    ///         "angry".to_string(),
    ///         "happy".to_string(),
    ///         "sad".to_string(),
    ///     ])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self> {
        validate_labels(&labels)?;
        self.labels = Some(labels);
        Ok(self)
    }

    /// Sets the encoded sequence length. Must match the length the model was
    /// trained with.
    ///
    /// # Arguments
    /// * `max_length` - Number of token slots per encoded sequence
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful,
    ///   or `Config` if the length is zero
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use amygdala::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new().with_max_length(128)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_max_length(mut self, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(ClassifierError::Config(
                "max length must be greater than zero".to_string(),
            ));
        }
        self.max_length = Some(max_length);
        Ok(self)
    }

    /// Builds and returns the final classifier.
    ///
    /// # Returns
    /// * `Result<EmotionClassifier, ClassifierError>` - The constructed
    ///   classifier if successful, or `Config` if no model was set
    ///
    /// # Example
    /// ```
    /// # use amygdala::{ClassifierError, EmotionModel, TokenSequence};
    /// # struct Uniform(usize);
    /// # impl EmotionModel for Uniform {
    /// #     fn class_probabilities(&self, _: &TokenSequence) -> Result<Vec<f32>, ClassifierError> {
    /// #         Ok(vec![1.0 / self.0 as f32; self.0])
    /// #     }
    /// # }
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use amygdala::EmotionClassifier;
    ///
    /// let classifier = EmotionClassifier::builder()
    ///     .with_model(Uniform(6))
    ///     .with_labels(vec![
    ///         "angry".to_string(), "disgust".to_string(), "fear".to_string(),
    ///         "happy".to_string(), "neutral".to_string(), "sad".to_string(),
    ///     ])?
    ///     .build()?;
    ///
    /// let prediction = classifier.predict("I am happy")?;
    /// assert_eq!(prediction.scores.len(), 6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<EmotionClassifier> {
        let model = self.model.ok_or_else(|| {
            ClassifierError::Config(
                "no model configured; call with_model_file() or with_model()".to_string(),
            )
        })?;

        let labels = match self.labels {
            Some(labels) => labels,
            None => resolve_labels(model.label_hint().as_deref()),
        };
        let vocabulary = self.vocabulary.unwrap_or_else(Vocabulary::builtin);
        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        let tokenizer = Tokenizer::new(vocabulary, max_length);

        info!(
            "Built classifier: {} labels, vocabulary of {} words, sequence length {}",
            labels.len(),
            tokenizer.vocabulary().len(),
            max_length
        );

        Ok(EmotionClassifier::new(
            self.model_path,
            tokenizer,
            model,
            labels,
        ))
    }
}
