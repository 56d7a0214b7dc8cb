//! Compliance gate for pending code submissions.
//!
//! mlgate takes the list of files changed relative to a git reference, runs
//! five independent detectors over it (ML library imports, serialized model
//! files, weight-loading operations, pretrained model usage, external
//! downloads), aggregates their findings into a fixed-shape JSON report, and
//! derives an accept/reject verdict: exit 0 when every detector came back
//! empty, exit 1 otherwise. Pattern matching is plain substring containment
//! on 1-indexed lines of `.py` files; the pattern sets and the report path
//! can be overridden per run via YAML config.

pub mod changeset;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod report;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use changeset::{ChangeSetProvider, FileListProvider, GitChangeSetProvider};
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use detector::{
    DetectionResult, Detector, DetectorKind, ExtensionDetector, Finding, Location, PatternDetector,
};
pub use error::{GateError, Result};
pub use report::Report;
pub use reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
pub use run::{run_gate, scan_changes};
