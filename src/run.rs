use crate::changeset::{ChangeSetProvider, FileListProvider, GitChangeSetProvider};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::detector::{Detector, DetectorKind, ExtensionDetector, PatternDetector};
use crate::error::Result;
use crate::report::Report;
use crate::reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;

/// Runs the full pipeline: change set, five detectors, aggregation, report
/// artifact, verdict. Detectors are independent and run in a fixed order
/// only for readability; the aggregated report does not depend on it.
pub fn scan_changes(cli: &Cli, config: &Config) -> Result<Report> {
    let files = changed_files(cli)?;
    debug!(count = files.len(), "Scanning change set");

    let imports = PatternDetector::new(DetectorKind::MlImport, config.ml_libraries.clone())
        .with_root(&cli.repo)
        .scan(&files)?;
    let model_files = ExtensionDetector::new(config.model_extensions.clone()).scan(&files)?;
    let weight_ops = PatternDetector::new(DetectorKind::WeightOp, config.weight_ops.clone())
        .with_root(&cli.repo)
        .scan(&files)?;
    let pretrained =
        PatternDetector::new(DetectorKind::PretrainedModel, config.pretrained_models.clone())
            .with_root(&cli.repo)
            .scan(&files)?;
    let downloads =
        PatternDetector::new(DetectorKind::Download, config.download_commands.clone())
            .with_root(&cli.repo)
            .scan(&files)?;

    Ok(Report::aggregate(
        imports,
        model_files,
        weight_ops,
        pretrained,
        downloads,
    ))
}

fn changed_files(cli: &Cli) -> Result<Vec<String>> {
    match &cli.files_from {
        Some(list) => FileListProvider::new(list).changed_files(),
        None => GitChangeSetProvider::new(&cli.repo, cli.diff_ref.as_str()).changed_files(),
    }
}

/// Entry point for the gate. Exit code 0 means no findings, 1 means the
/// submission is rejected, 2 means the gate itself failed to run.
pub fn run_gate(cli: &Cli) -> ExitCode {
    match try_run(cli) {
        Ok(report) if report.passed() => {
            println!("{}", "No high-risk issues detected.".green());
            ExitCode::SUCCESS
        }
        Ok(_) => {
            println!(
                "{}",
                "Push rejected due to detected security or compliance issues."
                    .red()
                    .bold()
            );
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn try_run(cli: &Cli) -> Result<Report> {
    let config = Config::load(cli.config.as_deref())?;
    let report = scan_changes(cli, &config)?;

    report.write_to(&cli.output)?;
    println!("Report saved to {}", cli.output.display());

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };
    print!("{}", reporter.report(&report));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(dir: &TempDir, list: &str) -> Cli {
        let list_path = dir.path().join("changed.txt");
        fs::write(&list_path, list).unwrap();
        Cli::try_parse_from([
            "mlgate",
            dir.path().to_str().unwrap(),
            "--files-from",
            list_path.to_str().unwrap(),
            "--output",
            dir.path().join("report.json").to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_scan_clean_change_set_passes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "just prose about models\n").unwrap();
        let cli = cli_for(&dir, "readme.md\n");

        let report = scan_changes(&cli, &Config::default()).unwrap();
        assert!(report.passed());
    }

    #[test]
    fn test_scan_flags_imports_and_weights() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("model_train.py"),
            "import os\nimport sys\nimport torch\n\n\n\n\n\n\nmodel.load_weights('w.h5')\n",
        )
        .unwrap();
        let cli = cli_for(&dir, "model_train.py\n");

        let report = scan_changes(&cli, &Config::default()).unwrap();
        assert!(!report.passed());

        let imports = &report.ml_libraries["model_train.py"];
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].location.line, Some(3));
        assert!(imports[0].code.contains("torch"));

        let weights = &report.weight_ops["model_train.py"];
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].location.line, Some(10));
        assert!(weights[0].code.contains("load_weights"));
    }

    #[test]
    fn test_scan_binary_model_file_is_flagged_without_reading() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("weights.pt"), [0u8, 159, 146, 150]).unwrap();
        let cli = cli_for(&dir, "weights.pt\n");

        let report = scan_changes(&cli, &Config::default()).unwrap();
        assert!(!report.passed());
        assert!(report.model_files.contains_key("weights.pt"));
        assert!(report.ml_libraries.is_empty());
        assert!(report.weight_ops.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("train.py"), "import tensorflow\n").unwrap();
        let cli = cli_for(&dir, "train.py\n");

        let first = scan_changes(&cli, &Config::default()).unwrap();
        let second = scan_changes(&cli, &Config::default()).unwrap();
        assert_eq!(
            serde_json::to_string_pretty(&first).unwrap(),
            serde_json::to_string_pretty(&second).unwrap()
        );
    }

    #[test]
    fn test_detector_execution_order_does_not_change_report() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("train.py"),
            "import torch\nmodel = BERT()\nw = pickle.load(f)\nsubprocess.run(['curl', url])\n",
        )
        .unwrap();
        fs::write(dir.path().join("weights.pt"), [1u8, 2, 3]).unwrap();
        let cli = cli_for(&dir, "train.py\nweights.pt\n");

        let config = Config::default();
        let forward = scan_changes(&cli, &config).unwrap();

        // Same detectors, run back to front, aggregated into the same
        // report fields.
        let files = changed_files(&cli).unwrap();
        let downloads =
            PatternDetector::new(DetectorKind::Download, config.download_commands.clone())
                .with_root(&cli.repo)
                .scan(&files)
                .unwrap();
        let pretrained = PatternDetector::new(
            DetectorKind::PretrainedModel,
            config.pretrained_models.clone(),
        )
        .with_root(&cli.repo)
        .scan(&files)
        .unwrap();
        let weight_ops = PatternDetector::new(DetectorKind::WeightOp, config.weight_ops.clone())
            .with_root(&cli.repo)
            .scan(&files)
            .unwrap();
        let model_files = ExtensionDetector::new(config.model_extensions.clone())
            .scan(&files)
            .unwrap();
        let imports = PatternDetector::new(DetectorKind::MlImport, config.ml_libraries.clone())
            .with_root(&cli.repo)
            .scan(&files)
            .unwrap();
        let reversed = Report::aggregate(imports, model_files, weight_ops, pretrained, downloads);

        assert!(!forward.passed());
        assert_eq!(
            serde_json::to_string_pretty(&forward).unwrap(),
            serde_json::to_string_pretty(&reversed).unwrap()
        );
    }

    #[test]
    fn test_scan_custom_config_patterns() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("train.py"), "import jax\n").unwrap();
        let cli = cli_for(&dir, "train.py\n");

        let mut config = Config::default();
        assert!(scan_changes(&cli, &config).unwrap().passed());

        config.ml_libraries = vec!["jax".to_string()];
        let report = scan_changes(&cli, &config).unwrap();
        assert!(report.ml_libraries.contains_key("train.py"));
    }

    #[test]
    fn test_scan_unreadable_py_file_fails() {
        let dir = TempDir::new().unwrap();
        let cli = cli_for(&dir, "missing.py\n");

        let err = scan_changes(&cli, &Config::default()).unwrap_err();
        assert!(matches!(err, crate::error::GateError::ReadError { .. }));
    }
}
