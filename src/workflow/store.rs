use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use super::Workflow;

/// Errors raised while loading or saving a workflow file.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("failed to read workflow file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("workflow file {path} is not valid workflow JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write workflow file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize workflow: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes workflow exports on disk.
///
/// Loading never mutates the input file; saving creates or overwrites the
/// target. Serialization is deterministic, so saving the same document twice
/// produces byte-identical files.
pub struct WorkflowStore;

impl WorkflowStore {
    pub async fn load(path: &Path) -> Result<Workflow, WorkflowError> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| WorkflowError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let workflow = serde_json::from_str(&raw).map_err(|source| WorkflowError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded workflow");
        Ok(workflow)
    }

    /// Pretty-prints with two-space indentation, matching the format of the
    /// original export pipeline, and ends the file with a newline.
    pub async fn save(path: &Path, workflow: &Workflow) -> Result<(), WorkflowError> {
        let mut rendered = serde_json::to_string_pretty(workflow)?;
        rendered.push('\n');
        fs::write(path, rendered)
            .await
            .map_err(|source| WorkflowError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "saved workflow");
        Ok(())
    }
}
