//! Batch command report data structures.

use super::{
    generate::GenerateReport,
    output::{Output, Report},
};

/// Report data from generating every configured interface.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful runs, in config order.
    pub generated: Vec<GenerateReport>,
    /// Failed runs, in config order.
    pub failures: Vec<BatchFailure>,
}

/// An interface whose generation failed.
#[derive(Debug)]
pub struct BatchFailure {
    pub interface_id: String,
    pub error: String,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for BatchReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, report) in self.generated.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            report.render(out);
        }

        for failure in &self.failures {
            out.error(&format!("interface {}: {}", failure.interface_id, failure.error));
        }

        out.newline();
        out.key_value(
            "Summary",
            &format!(
                "{} of {} interfaces generated",
                self.generated.len(),
                self.total()
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{GenerationResult, RecordingOutput, WrittenResult};

    #[test]
    fn test_render_failures_to_stderr() {
        let report = BatchReport {
            generated: vec![GenerateReport {
                interface_id: "1".to_string(),
                title: String::new(),
                function_name: "ping".to_string(),
                request_type: None,
                response_type: "PingGETRes".to_string(),
                warnings: Vec::new(),
                result: GenerationResult::Written(WrittenResult::default()),
            }],
            failures: vec![BatchFailure {
                interface_id: "2".to_string(),
                error: "请登录...".to_string(),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_success());
        assert_eq!(out.stderr, vec!["error: interface 2: 请登录..."]);
        assert_eq!(
            out.stdout.last().map(String::as_str),
            Some("Summary: 1 of 2 interfaces generated")
        );
    }
}
