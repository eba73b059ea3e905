use ort::Error as OrtError;
use thiserror::Error;

/// Errors produced while building a classifier or serving a prediction.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Vocabulary files, builder state, or runtime settings are unusable.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Caller input was rejected (blank text, malformed label list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The model's class count disagrees with the supplied label list.
    #[error("Label mismatch: model produced {scores} class scores but {labels} labels were supplied")]
    LabelMismatch { scores: usize, labels: usize },
    /// The model file could not be loaded.
    #[error("Model error: {0}")]
    Model(String),
    /// The inference backend failed while producing class scores.
    #[error("Inference error: {0}")]
    Inference(String),
    /// The model's signature cannot accept token sequences.
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<OrtError> for ClassifierError {
    fn from(err: OrtError) -> Self {
        ClassifierError::Model(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
