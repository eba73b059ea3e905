use lazy_static::lazy_static;
use log::warn;

use crate::classifier::ClassifierError;

lazy_static! {
    /// Emotion classes of the reference text model, in output order.
    pub static ref DEFAULT_LABELS: Vec<String> =
        ["angry", "disgust", "fear", "happy", "neutral", "sad"]
            .iter()
            .map(|label| label.to_string())
            .collect();
}

/// Resolves the label list for a model: a well-formed hint from the model's
/// own metadata wins, otherwise the static default table. Pure function of
/// its arguments; callers that have an explicit label list skip this entirely.
pub fn resolve_labels(hint: Option<&[String]>) -> Vec<String> {
    match hint {
        Some(labels) if is_well_formed(labels) => labels.to_vec(),
        Some(_) => {
            warn!("Model advertised a malformed label list; using default labels");
            DEFAULT_LABELS.clone()
        }
        None => DEFAULT_LABELS.clone(),
    }
}

/// Parses a comma-separated label argument. Blank entries are dropped; a list
/// with no usable labels is rejected.
pub fn parse_label_list(raw: &str) -> Result<Vec<String>, ClassifierError> {
    let labels: Vec<String> = raw
        .split(',')
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect();
    if labels.is_empty() {
        return Err(ClassifierError::InvalidInput(format!(
            "label list '{}' contains no labels",
            raw
        )));
    }
    Ok(labels)
}

/// Validates a caller-supplied label list: non-empty, no blank entries, no
/// duplicates.
pub(crate) fn validate_labels(labels: &[String]) -> Result<(), ClassifierError> {
    if labels.is_empty() {
        return Err(ClassifierError::InvalidInput(
            "label list cannot be empty".to_string(),
        ));
    }
    if let Some(pos) = labels.iter().position(|label| label.trim().is_empty()) {
        return Err(ClassifierError::InvalidInput(format!(
            "label {} is blank",
            pos + 1
        )));
    }
    if !is_well_formed(labels) {
        return Err(ClassifierError::InvalidInput(
            "label list contains duplicate entries".to_string(),
        ));
    }
    Ok(())
}

fn is_well_formed(labels: &[String]) -> bool {
    if labels.is_empty() || labels.iter().any(|label| label.trim().is_empty()) {
        return false;
    }
    let mut seen = std::collections::HashSet::new();
    labels.iter().all(|label| seen.insert(label.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_model_hint() {
        let hint = vec!["calm".to_string(), "tense".to_string()];
        assert_eq!(resolve_labels(Some(&hint)), hint);
    }

    #[test]
    fn resolve_falls_back_on_malformed_hint() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(resolve_labels(Some(&empty)), *DEFAULT_LABELS);

        let blank = vec!["calm".to_string(), "  ".to_string()];
        assert_eq!(resolve_labels(Some(&blank)), *DEFAULT_LABELS);

        assert_eq!(resolve_labels(None), *DEFAULT_LABELS);
    }

    #[test]
    fn parse_splits_and_trims() {
        let labels = parse_label_list("angry, happy ,sad").unwrap();
        assert_eq!(labels, vec!["angry", "happy", "sad"]);
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(parse_label_list(" , ,").is_err());
        assert!(parse_label_list("").is_err());
    }

    #[test]
    fn validate_rejects_duplicates() {
        let labels = vec!["happy".to_string(), "happy".to_string()];
        assert!(validate_labels(&labels).is_err());
    }
}
