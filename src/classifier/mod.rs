mod builder;
mod classifier;
mod error;
mod model;
mod prediction;
mod tokenizer;
mod utils;

pub use builder::ClassifierBuilder;
pub use classifier::EmotionClassifier;
pub use error::{ClassifierError, Result};
pub use model::{EmotionModel, OnnxModel, LABEL_METADATA_KEY};
pub use prediction::Prediction;
pub use tokenizer::{normalize, TokenSequence, Tokenizer, DEFAULT_MAX_LENGTH};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path of the loaded ONNX model, if the backend came from a file
    pub model_path: Option<String>,
    /// Labels in model output order
    pub labels: Vec<String>,
    /// Number of classes the classifier reports
    pub num_classes: usize,
    /// Number of words in the vocabulary
    pub vocabulary_size: usize,
    /// Encoded sequence length
    pub max_length: usize,
}
