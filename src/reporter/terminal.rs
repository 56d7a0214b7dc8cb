use crate::detector::{DetectionResult, DetectorKind, Finding};
use crate::report::Report;
use crate::reporter::Reporter;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn count(result: &DetectionResult) -> usize {
        result.values().map(Vec::len).sum()
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let location = match finding.location.line {
            Some(line) => format!("{}:{}", finding.location.file, line),
            None => finding.location.file.clone(),
        };
        format!(
            "  {}: {} {}",
            location,
            format!("[{}]", finding.kind).yellow(),
            finding.code
        )
    }

    fn format_section(&self, kind: DetectorKind, result: &DetectionResult) -> String {
        let count = Self::count(result);
        let count_label = if count == 0 {
            count.to_string().green().to_string()
        } else {
            count.to_string().red().bold().to_string()
        };

        let mut output = format!("{}: {}\n", kind.label(), count_label);
        if self.verbose {
            for findings in result.values() {
                for finding in findings {
                    output.push_str(&self.format_finding(finding));
                    output.push('\n');
                }
            }
        }
        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &Report) -> String {
        let mut output = String::new();
        output.push_str(&self.format_section(DetectorKind::MlImport, &report.ml_libraries));
        output.push_str(&self.format_section(DetectorKind::ModelFile, &report.model_files));
        output.push_str(&self.format_section(DetectorKind::WeightOp, &report.weight_ops));
        output.push_str(
            &self.format_section(DetectorKind::PretrainedModel, &report.pretrained_models),
        );
        output.push_str(&self.format_section(DetectorKind::Download, &report.downloads));
        output
    }
}
