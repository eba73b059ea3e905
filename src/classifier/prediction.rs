use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::{ClassifierError, Result};
use super::utils::max_index;

/// A formatted classification outcome: the winning label, its probability,
/// and the full per-label score map in caller-supplied order.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub emotion: String,
    pub confidence: f32,
    #[serde(serialize_with = "serialize_scores")]
    pub scores: Vec<(String, f32)>,
    pub tokens_used: usize,
}

impl Prediction {
    /// Pairs raw model scores with their labels and picks the winner.
    ///
    /// The winner is the label at the first index attaining the maximum score
    /// (lowest index wins ties). The confidence is reported as the model
    /// produced it: no softmax, no clamping. Callers must supply labels whose
    /// count matches the model's output dimensionality, and a model that does
    /// not emit a probability distribution is the caller's problem.
    pub fn from_scores(
        raw_scores: Vec<f32>,
        labels: &[String],
        tokens_used: usize,
    ) -> Result<Self> {
        if raw_scores.len() != labels.len() {
            return Err(ClassifierError::LabelMismatch {
                scores: raw_scores.len(),
                labels: labels.len(),
            });
        }
        let best = max_index(&raw_scores)
            .ok_or_else(|| ClassifierError::Inference("model produced no class scores".to_string()))?;

        Ok(Self {
            emotion: labels[best].clone(),
            confidence: raw_scores[best],
            scores: labels.iter().cloned().zip(raw_scores).collect(),
            tokens_used,
        })
    }

    /// Score for a single label, if present.
    pub fn score_for(&self, label: &str) -> Option<f32> {
        self.scores
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, score)| score)
    }
}

fn serialize_scores<S>(scores: &[(String, f32)], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for (label, score) in scores {
        map.serialize_entry(label, score)?;
    }
    map.end()
}
