use crate::error::{RideMatchError, Result};
use crate::types::answers::{AnswerSet, AnswerValue};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Read an answer file: JSON when the extension says so, TOML otherwise.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    if !path.exists() {
        return Err(RideMatchError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let raw: BTreeMap<String, AnswerValue> = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| RideMatchError::AnswersParse(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| RideMatchError::AnswersParse(format!("{}: {}", path.display(), e)))?
    };
    debug!(path = %path.display(), answered = raw.len(), "answers loaded");
    Ok(AnswerSet::from_raw(raw))
}
