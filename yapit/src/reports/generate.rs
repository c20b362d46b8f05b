//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from generating one interface.
#[derive(Debug)]
pub struct GenerateReport {
    pub interface_id: String,

    /// Interface title from the schema source.
    pub title: String,

    pub function_name: String,

    /// Root request type, absent when the endpoint takes no payload.
    pub request_type: Option<String>,

    pub response_type: String,

    /// Recovered degradations, already formatted.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub written: Vec<String>,
    /// Existing files left alone under `--skip-existing`.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    /// `4242 (提现)`, or just the id for an untitled interface.
    pub fn label(&self) -> String {
        if self.title.trim().is_empty() {
            self.interface_id.clone()
        } else {
            format!("{} ({})", self.interface_id, self.title.trim())
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Interface", &self.label());
        out.key_value("Function", &self.function_name);
        if let Some(request) = &self.request_type {
            out.key_value("Request", request);
        }
        out.key_value("Response", &self.response_type);

        if !written.written.is_empty() {
            out.newline();
            out.section("Generated");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Kept existing");
            for path in &written.skipped {
                out.list_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {}",
            preview.files.len(),
            self.label()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            interface_id: "4242".to_string(),
            title: "提现".to_string(),
            function_name: "withdraw".to_string(),
            request_type: None,
            response_type: "WithdrawRes".to_string(),
            warnings: vec!["schema [schema]: malformed body".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(WrittenResult {
            written: vec!["out/types.ts".to_string()],
            skipped: vec!["out/api.ts".to_string()],
        }))
        .render(&mut out);

        assert_eq!(out.stderr, vec!["warning: schema [schema]: malformed body"]);
        assert_eq!(
            out.stdout,
            vec![
                "Interface: 4242 (提现)",
                "Function: withdraw",
                "Response: WithdrawRes",
                "",
                "Generated:",
                "  + out/types.ts",
                "",
                "Kept existing:",
                "  - out/api.ts",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        let mut report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "out/types.ts".to_string(),
                content: "export interface WithdrawRes {}".to_string(),
            }],
        }));
        report.title = String::new();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "── out/types.ts ──",
                "export interface WithdrawRes {}",
                "── Summary ──",
                "1 files would be generated for 4242",
            ]
        );
    }
}
