//! A text emotion classifier backed by ONNX models.
//!
//! Text is encoded with a deterministic static-vocabulary tokenizer into a
//! fixed-length integer sequence, the model scores it, and the winning label
//! is paired with the full per-label score map. The inference backend sits
//! behind the [`EmotionModel`] trait, so anything that can turn a token
//! sequence into class probabilities plugs in: ONNX Runtime in production,
//! plain structs in tests.
//!
//! # Basic Usage
//!
//! ```rust
//! use amygdala::{ClassifierError, EmotionClassifier, EmotionModel, TokenSequence};
//!
//! struct Uniform(usize);
//!
//! impl EmotionModel for Uniform {
//!     fn class_probabilities(&self, _: &TokenSequence) -> Result<Vec<f32>, ClassifierError> {
//!         Ok(vec![1.0 / self.0 as f32; self.0])
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = EmotionClassifier::builder()
//!     .with_model(Uniform(6))
//!     .build()?;
//!
//! let prediction = classifier.predict("I am so happy today")?;
//! println!("{} ({:.2})", prediction.emotion, prediction.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! With a real model, use
//! [`with_model_file`](classifier::ClassifierBuilder::with_model_file)
//! instead; the session is validated at load so that models which cannot
//! accept token sequences are rejected up front.

pub mod classifier;
pub mod labels;
pub mod output;
mod runtime;
pub mod vocabulary;

pub use classifier::{
    normalize, ClassifierBuilder, ClassifierError, ClassifierInfo, EmotionClassifier,
    EmotionModel, OnnxModel, Prediction, TokenSequence, Tokenizer, DEFAULT_MAX_LENGTH,
    LABEL_METADATA_KEY,
};
pub use labels::{parse_label_list, resolve_labels, DEFAULT_LABELS};
pub use output::{FailureReport, PredictionReport};
pub use runtime::{create_session_builder, ensure_initialized, RuntimeConfig};
pub use vocabulary::{Vocabulary, PAD_INDEX, UNK_INDEX};

pub fn init_logger() {
    env_logger::init();
}
