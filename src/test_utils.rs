#[cfg(test)]
pub mod fixtures {
    use crate::detector::{DetectionResult, DetectorKind, Finding};
    use crate::report::Report;

    pub fn empty_report() -> Report {
        Report::aggregate(
            DetectionResult::new(),
            DetectionResult::new(),
            DetectionResult::new(),
            DetectionResult::new(),
            DetectionResult::new(),
        )
    }

    /// One-file DetectionResult with a single representative finding.
    pub fn single_detection(kind: DetectorKind, file: &str) -> DetectionResult {
        let finding = match kind {
            DetectorKind::ModelFile => Finding::for_path(kind, file, "model file detected"),
            _ => Finding::at_line(kind, file, 1, "import torch"),
        };
        let mut result = DetectionResult::new();
        result.insert(file.to_string(), vec![finding]);
        result
    }
}
