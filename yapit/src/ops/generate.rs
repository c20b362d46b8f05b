//! Generate operation - fetch one interface and write its documents.

use eyre::{Context, Result};
use yapit_codegen::Diagnostic;
use yapit_codegen_typescript::{GenerateOptions, Generator};
use yapit_core::{Overwrite, WriteResult};
use yapit_manifest::Invocation;
use yapit_source::SchemaClient;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// What to do with the generated documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteMode {
    /// Print instead of writing.
    pub dry_run: bool,
    /// Leave existing files untouched.
    pub skip_existing: bool,
}

impl WriteMode {
    fn overwrite(&self) -> Overwrite {
        if self.skip_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        }
    }
}

/// Execute the generate operation for one invocation.
///
/// Nothing is written when the fetch or the generation fails.
pub async fn generate(invocation: &Invocation, mode: WriteMode) -> Result<GenerateReport> {
    let client = SchemaClient::new(invocation.source.clone())?;
    let id = invocation.interface_id.as_str();
    let endpoint = client
        .fetch_endpoint(id)
        .await
        .wrap_err_with(|| format!("failed to fetch interface {id}"))?;

    let generator = Generator::new(GenerateOptions {
        naming: invocation.naming,
        request_path: invocation.request_path.clone(),
    });
    let artifacts = generator
        .generate(&endpoint)
        .wrap_err_with(|| format!("failed to generate interface {id}"))?;

    let files = artifacts.files(&invocation.output_dir, mode.overwrite());
    let result = if mode.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: files
                .iter()
                .map(|file| PreviewFile {
                    path: file.path().display().to_string(),
                    content: file.content(),
                })
                .collect(),
        })
    } else {
        let mut written = WrittenResult::default();
        for file in &files {
            let path = file.path().display().to_string();
            match file.write()? {
                WriteResult::Written => written.written.push(path),
                WriteResult::Skipped => written.skipped.push(path),
            }
        }
        tracing::info!(
            interface_id = id,
            written = written.written.len(),
            skipped = written.skipped.len(),
            "generated interface"
        );
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        interface_id: invocation.interface_id.clone(),
        title: endpoint.title,
        function_name: artifacts.function_name.clone(),
        request_type: artifacts.request_type.clone(),
        response_type: artifacts.response_type.clone(),
        warnings: artifacts.warnings().map(format_diagnostic).collect(),
        result,
    })
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
