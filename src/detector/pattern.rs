use crate::detector::{DetectionResult, Detector, DetectorKind, Finding};
use crate::error::{GateError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::trace;

/// Line-scanning detector shared by the four content-based checks (ML
/// imports, weight operations, pretrained models, external downloads).
///
/// Matching is plain substring containment, not tokenized: `torchvision`
/// matches the `torch` pattern and a prose mention of `GPT` matches the
/// pretrained set. That is the intended semantic; the gate prefers false
/// positives over missed artifacts.
pub struct PatternDetector {
    kind: DetectorKind,
    patterns: Vec<String>,
    /// Change-set paths are resolved against this directory before reading.
    /// Findings keep the original relative path.
    root: PathBuf,
}

impl PatternDetector {
    pub fn new(kind: DetectorKind, patterns: Vec<String>) -> Self {
        Self {
            kind,
            patterns,
            root: PathBuf::from("."),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Raw suffix test, matching how model extensions are checked: a file
    /// literally named `.py` still counts.
    fn is_candidate(path: &str) -> bool {
        path.ends_with(".py")
    }

    /// Scan one file's content. Lines are 1-indexed; a line with several
    /// matching patterns still yields a single finding.
    fn scan_content(&self, path: &str, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if self.patterns.iter().any(|p| line.contains(p.as_str())) {
                findings.push(Finding::at_line(self.kind, path, idx + 1, line.trim()));
            }
        }
        findings
    }
}

impl Detector for PatternDetector {
    fn kind(&self) -> DetectorKind {
        self.kind
    }

    /// Scans every `.py` file in the change set. An unreadable candidate
    /// file aborts the scan; the gate runs once per submission and a partial
    /// report must never pass as a clean one.
    fn scan(&self, files: &[String]) -> Result<DetectionResult> {
        let mut results = DetectionResult::new();

        for path in files {
            if !Self::is_candidate(path) {
                continue;
            }

            let content =
                fs::read_to_string(self.root.join(path)).map_err(|e| GateError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;

            trace!(
                detector = self.kind.as_str(),
                file = path.as_str(),
                lines = content.lines().count(),
                "Scanning file"
            );

            let findings = self.scan_content(path, &content);
            if !findings.is_empty() {
                results.insert(path.clone(), findings);
            }
        }

        Ok(results)
    }
}
