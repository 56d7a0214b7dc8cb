pub mod extension;
pub mod pattern;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use extension::ExtensionDetector;
pub use pattern::PatternDetector;

/// Which detector produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    MlImport,
    ModelFile,
    WeightOp,
    PretrainedModel,
    Download,
}

impl DetectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::MlImport => "ml_import",
            DetectorKind::ModelFile => "model_file",
            DetectorKind::WeightOp => "weight_op",
            DetectorKind::PretrainedModel => "pretrained_model",
            DetectorKind::Download => "download",
        }
    }

    /// Human label used in terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            DetectorKind::MlImport => "ML library import",
            DetectorKind::ModelFile => "Model file",
            DetectorKind::WeightOp => "Weight loading operation",
            DetectorKind::PretrainedModel => "Pretrained model usage",
            DetectorKind::Download => "External download",
        }
    }
}

impl std::fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    /// 1-indexed line number. Absent for findings that never touch file
    /// contents (model file detection matches on the path alone).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: DetectorKind,
    pub location: Location,
    /// The trimmed matched line, or a fixed marker for path-only findings.
    pub code: String,
}

impl Finding {
    pub fn at_line(kind: DetectorKind, file: &str, line: usize, code: &str) -> Self {
        Self {
            kind,
            location: Location {
                file: file.to_string(),
                line: Some(line),
            },
            code: code.to_string(),
        }
    }

    pub fn for_path(kind: DetectorKind, file: &str, code: &str) -> Self {
        Self {
            kind,
            location: Location {
                file: file.to_string(),
                line: None,
            },
            code: code.to_string(),
        }
    }
}

/// Findings grouped by file path. BTreeMap keeps serialization deterministic
/// so repeated runs over the same change set produce byte-identical reports.
pub type DetectionResult = BTreeMap<String, Vec<Finding>>;

/// Core trait for all detectors. Each detector consumes the full change set
/// and returns its own findings; detectors share no state and may run in any
/// order.
pub trait Detector {
    fn kind(&self) -> DetectorKind;
    fn scan(&self, files: &[String]) -> Result<DetectionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(DetectorKind::MlImport.as_str(), "ml_import");
        assert_eq!(DetectorKind::ModelFile.as_str(), "model_file");
        assert_eq!(DetectorKind::WeightOp.as_str(), "weight_op");
        assert_eq!(DetectorKind::PretrainedModel.as_str(), "pretrained_model");
        assert_eq!(DetectorKind::Download.as_str(), "download");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&DetectorKind::WeightOp).unwrap();
        assert_eq!(json, "\"weight_op\"");
        let back: DetectorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DetectorKind::WeightOp);
    }

    #[test]
    fn test_location_without_line_omits_field() {
        let finding = Finding::for_path(DetectorKind::ModelFile, "weights.pt", "model file detected");
        let json = serde_json::to_string(&finding).unwrap();
        assert!(!json.contains("line"));
    }

    #[test]
    fn test_location_with_line_serialization() {
        let finding = Finding::at_line(DetectorKind::MlImport, "train.py", 3, "import torch");
        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"line\":3"));
        assert!(json.contains("\"file\":\"train.py\""));
    }
}
