use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::measurement::RawMeasurement;
use crate::model::scores::ScoreSummary;

/// Structural document failures. Per-metric gaps never surface here; they
/// degrade inside the pipeline.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_raw_measurement(path: &Path) -> Result<RawMeasurement, InputError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_score_summary(path: &Path) -> Result<ScoreSummary, InputError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan `<root>/*/score.json` and pair each summary with the id of its
/// parent directory. Entries come back sorted by id so directory iteration
/// order never leaks into the output.
pub fn collect_score_summaries(root: &Path) -> Result<Vec<(String, ScoreSummary)>, InputError> {
    let entries = std::fs::read_dir(root).map_err(|source| InputError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut items = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InputError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let score_path = entry.path().join("score.json");
        if !score_path.is_file() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        items.push((id, load_score_summary(&score_path)?));
    }
    items.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(items)
}

/// Id of a score document is the name of the directory holding it.
pub fn score_document_id(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_text(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
