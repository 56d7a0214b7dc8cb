use crate::detector::DetectionResult;
use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Aggregated result of one gate run. The five fields are fixed, one per
/// detector, and the serialized key names and ordering match the report
/// artifact consumed by downstream tooling. No timestamp is embedded:
/// re-running the gate over an unchanged change set must produce a
/// byte-identical artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "AI_ML_Library_Detections")]
    pub ml_libraries: DetectionResult,
    #[serde(rename = "Model_File_Detections")]
    pub model_files: DetectionResult,
    #[serde(rename = "Weight_Operation_Detections")]
    pub weight_ops: DetectionResult,
    #[serde(rename = "Pretrained_Model_Detections")]
    pub pretrained_models: DetectionResult,
    #[serde(rename = "External_Download_Detections")]
    pub downloads: DetectionResult,
}

impl Report {
    /// Pure aggregation of the five detector outputs. Detector execution
    /// order does not matter; each output lands in its named field.
    pub fn aggregate(
        ml_libraries: DetectionResult,
        model_files: DetectionResult,
        weight_ops: DetectionResult,
        pretrained_models: DetectionResult,
        downloads: DetectionResult,
    ) -> Self {
        Self {
            ml_libraries,
            model_files,
            weight_ops,
            pretrained_models,
            downloads,
        }
    }

    /// Accept iff no detector produced a finding.
    pub fn passed(&self) -> bool {
        self.ml_libraries.is_empty()
            && self.model_files.is_empty()
            && self.weight_ops.is_empty()
            && self.pretrained_models.is_empty()
            && self.downloads.is_empty()
    }

    /// Total finding count across all detectors.
    pub fn total_findings(&self) -> usize {
        [
            &self.ml_libraries,
            &self.model_files,
            &self.weight_ops,
            &self.pretrained_models,
            &self.downloads,
        ]
        .iter()
        .flat_map(|result| result.values())
        .map(Vec::len)
        .sum()
    }

    /// Serialize the report as pretty JSON and persist it, overwriting any
    /// prior artifact at the same path.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| GateError::WriteError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
