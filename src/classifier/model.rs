use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use ndarray::{Array2, Axis};
use ort::session::Session;
use ort::tensor::TensorElementType;
use ort::value::{Tensor, Value};

use super::error::{ClassifierError, Result};
use super::tokenizer::TokenSequence;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// Metadata key under which a model may advertise its own label list,
/// comma-separated in output order.
pub const LABEL_METADATA_KEY: &str = "emotion_labels";

/// Boundary over whatever runtime turns an encoded sequence into class
/// probabilities. Implemented by [`OnnxModel`] in production and by plain
/// structs in tests.
///
/// The output length equals the number of classes the loaded model was
/// trained for; the classifier never assumes a particular count. A failure is
/// fatal for the current request only.
pub trait EmotionModel: Send + Sync {
    /// Class probabilities for one encoded sequence.
    fn class_probabilities(&self, sequence: &TokenSequence) -> Result<Vec<f32>>;

    /// Labels advertised by the model itself, if any.
    fn label_hint(&self) -> Option<Vec<String>> {
        None
    }
}

/// ONNX Runtime implementation of [`EmotionModel`].
///
/// The wrapped model takes a single `(1, max_length)` integer tensor of token
/// indices and produces one probability per class; its final layer is softmax,
/// so outputs are reported as-is without renormalization.
pub struct OnnxModel {
    session: Session,
    input_name: String,
    input_type: TensorElementType,
}

impl OnnxModel {
    /// Loads a model file and validates that its signature can accept token
    /// sequences.
    pub fn load(path: &Path, config: &RuntimeConfig) -> Result<Self> {
        if !path.exists() {
            return Err(ClassifierError::Model(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let session = create_session_builder(config)
            .map_err(|e| ClassifierError::Model(format!("failed to configure session: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ClassifierError::Model(format!("failed to load model: {}", e)))?;

        let input_type = Self::validate_signature(&session)?;
        let input_name = session.inputs[0].name.clone();
        info!(
            "Loaded ONNX model from {} (input '{}', {:?})",
            path.display(),
            input_name,
            input_type
        );

        Ok(Self {
            session,
            input_name,
            input_type,
        })
    }

    /// Rejects models that cannot be driven by a token sequence: the first
    /// input must be an integer tensor. Feature-based models (audio
    /// spectrograms, images) take float inputs and fail here.
    fn validate_signature(session: &Session) -> Result<TensorElementType> {
        if session.inputs.is_empty() {
            return Err(ClassifierError::UnsupportedModel(
                "model has no inputs".to_string(),
            ));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::UnsupportedModel(
                "model has no outputs".to_string(),
            ));
        }
        match session.inputs[0].input_type.tensor_type() {
            Some(ty @ (TensorElementType::Int32 | TensorElementType::Int64)) => Ok(ty),
            Some(other) => Err(ClassifierError::UnsupportedModel(format!(
                "model expects {:?} input, not integer token sequences; \
                 feature-based models cannot be driven by this tokenizer",
                other
            ))),
            None => Err(ClassifierError::UnsupportedModel(
                "model input is not a tensor".to_string(),
            )),
        }
    }

    /// First output row as a plain score vector. The model emits
    /// `(1, num_classes)`; flat outputs are taken whole.
    fn scores_from_output(output: &Value) -> Result<Vec<f32>> {
        let view = output.try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::Inference(format!("failed to extract class scores: {}", e))
        })?;
        let scores: Vec<f32> = if view.ndim() == 2 {
            view.index_axis(Axis(0), 0).iter().copied().collect()
        } else {
            view.iter().copied().collect()
        };
        debug!("Model produced {} class scores", scores.len());
        Ok(scores)
    }
}

impl EmotionModel for OnnxModel {
    fn class_probabilities(&self, sequence: &TokenSequence) -> Result<Vec<f32>> {
        let len = sequence.len();
        if self.input_type == TensorElementType::Int64 {
            let ids: Vec<i64> = sequence.ids().iter().map(|&id| id as i64).collect();
            let array = Array2::from_shape_vec((1, len), ids)
                .map_err(|e| ClassifierError::Inference(format!("failed to shape input: {}", e)))?;
            let array_dyn = array.into_dyn();
            let array_view = array_dyn.as_standard_layout();
            let tensor = Tensor::from_array(&array_view).map_err(|e| {
                ClassifierError::Inference(format!("failed to create input tensor: {}", e))
            })?;
            let mut inputs = HashMap::new();
            inputs.insert(self.input_name.as_str(), tensor);
            let outputs = self
                .session
                .run(inputs)
                .map_err(|e| ClassifierError::Inference(format!("inference failed: {}", e)))?;
            Self::scores_from_output(&outputs[0])
        } else {
            let ids: Vec<i32> = sequence.ids().iter().map(|&id| id as i32).collect();
            let array = Array2::from_shape_vec((1, len), ids)
                .map_err(|e| ClassifierError::Inference(format!("failed to shape input: {}", e)))?;
            let array_dyn = array.into_dyn();
            let array_view = array_dyn.as_standard_layout();
            let tensor = Tensor::from_array(&array_view).map_err(|e| {
                ClassifierError::Inference(format!("failed to create input tensor: {}", e))
            })?;
            let mut inputs = HashMap::new();
            inputs.insert(self.input_name.as_str(), tensor);
            let outputs = self
                .session
                .run(inputs)
                .map_err(|e| ClassifierError::Inference(format!("inference failed: {}", e)))?;
            Self::scores_from_output(&outputs[0])
        }
    }

    fn label_hint(&self) -> Option<Vec<String>> {
        let metadata = self.session.metadata().ok()?;
        let raw = metadata.custom(LABEL_METADATA_KEY).ok()??;
        let labels: Vec<String> = raw
            .split(',')
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        if labels.is_empty() {
            None
        } else {
            Some(labels)
        }
    }
}
