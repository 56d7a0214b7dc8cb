use crate::error::{GateError, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Supplies the ordered list of file paths considered changed for the
/// current submission. The scan pipeline treats this list as opaque input.
pub trait ChangeSetProvider {
    fn changed_files(&self) -> Result<Vec<String>>;
}

/// Queries git for the files changed relative to a reference.
pub struct GitChangeSetProvider {
    repo_root: PathBuf,
    diff_ref: String,
}

impl GitChangeSetProvider {
    pub fn new(repo_root: impl Into<PathBuf>, diff_ref: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.into(),
            diff_ref: diff_ref.into(),
        }
    }
}

impl ChangeSetProvider for GitChangeSetProvider {
    fn changed_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["diff", "--name-only", &self.diff_ref])
            .current_dir(&self.repo_root)
            .output()
            .map_err(|e| GateError::SourceControl(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::SourceControl(stderr.trim().to_string()));
        }

        let files: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = files.len(), diff_ref = self.diff_ref.as_str(), "Change set from git");
        Ok(files)
    }
}

/// Reads the change set from a newline-separated file. Used by
/// `--files-from` and by tests that need a change set without a repository.
pub struct FileListProvider {
    path: PathBuf,
}

impl FileListProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChangeSetProvider for FileListProvider {
    fn changed_files(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| GateError::ReadError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
