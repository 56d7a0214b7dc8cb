use crate::detector::{DetectionResult, Detector, DetectorKind, Finding};
use crate::error::Result;
use tracing::debug;

/// Marker text attached to findings that match on the path alone.
pub const MODEL_FILE_MARKER: &str = "model file detected";

/// Flags serialized model files by suffix. Contents are never opened, so a
/// flagged file may be binary, empty, or otherwise unreadable without
/// affecting the scan.
pub struct ExtensionDetector {
    extensions: Vec<String>,
}

impl ExtensionDetector {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    fn matches(&self, path: &str) -> bool {
        self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }
}

impl Detector for ExtensionDetector {
    fn kind(&self) -> DetectorKind {
        DetectorKind::ModelFile
    }

    fn scan(&self, files: &[String]) -> Result<DetectionResult> {
        let mut results = DetectionResult::new();

        for path in files {
            if self.matches(path) {
                debug!(file = path.as_str(), "Model file flagged by extension");
                results.insert(
                    path.clone(),
                    vec![Finding::for_path(self.kind(), path, MODEL_FILE_MARKER)],
                );
            }
        }

        Ok(results)
    }
}
