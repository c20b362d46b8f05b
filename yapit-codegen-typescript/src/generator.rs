//! TypeScript generator producing `types.ts` and `api.ts` for one endpoint.

use std::path::Path;

use eyre::Result;
use yapit_codegen::{
    Diagnostic,
    synth::{NameAllocator, walk_payload},
};
use yapit_core::{File, Overwrite};
use yapit_ir::{Endpoint, Payload};
use yapit_manifest::{NamingConfig, Role};

use crate::{
    TS_NAMING,
    files::{ApiTs, GENERATED_HEADER, RequestArg, TypesTs},
};

/// Per-invocation generation options.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub naming: NamingConfig,
    /// URL used in the generated client call instead of the endpoint path.
    pub request_path: Option<String>,
}

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// The type-declaration document.
    pub types: String,
    /// The request-function document.
    pub api: String,
    /// Root request type, absent when the endpoint takes no payload.
    pub request_type: Option<String>,
    pub response_type: String,
    pub function_name: String,
    /// Issues recovered from while generating.
    pub diagnostics: Vec<Diagnostic>,
}

impl Artifacts {
    /// Diagnostics worth showing to a user.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning() || d.severity.is_error())
    }

    /// Both documents as files under `output_dir`.
    pub fn files(&self, output_dir: &Path, overwrite: Overwrite) -> Vec<File> {
        [(TypesTs::FILE_NAME, &self.types), (ApiTs::FILE_NAME, &self.api)]
            .into_iter()
            .map(|(name, content)| {
                let file =
                    File::new(output_dir.join(name), content.as_str()).with_header(GENERATED_HEADER);
                match overwrite {
                    Overwrite::Always => file,
                    Overwrite::IfMissing => file.if_missing(),
                }
            })
            .collect()
    }
}

/// TypeScript generator for a single endpoint.
///
/// Every call to [`generate`](Self::generate) uses a fresh
/// [`NameAllocator`], so one generator can serve many endpoints.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate both documents for `endpoint`.
    ///
    /// Degraded input never fails the run; only a name collision under the
    /// `reject` policy does.
    pub fn generate(&self, endpoint: &Endpoint) -> Result<Artifacts> {
        let mut diagnostics = Vec::new();
        let mut names = NameAllocator::new(self.options.naming, TS_NAMING);
        let path = endpoint.path.as_str();
        let method = endpoint.method;

        let request_name =
            names.type_name_or_placeholder(path, method, Role::Request, &mut diagnostics);
        let response_name =
            names.type_name_or_placeholder(path, method, Role::Response, &mut diagnostics);
        let function_name = names.function_name_or_placeholder(path, &mut diagnostics);

        let request_tree = if endpoint.request.is_present() {
            Some(walk_payload(
                &endpoint.request,
                request_name,
                &mut names,
                &mut diagnostics,
            )?)
        } else {
            None
        };
        let response_tree =
            walk_payload(&endpoint.response, response_name, &mut names, &mut diagnostics)?;

        let request = match (&endpoint.request, &request_tree) {
            (Payload::Query(_), Some(tree)) => RequestArg::Query(tree.root().name.clone()),
            (_, Some(tree)) => RequestArg::Body(tree.root().name.clone()),
            (_, None) => RequestArg::None,
        };
        let response_type = response_tree.root().name.clone();

        let types = TypesTs {
            title: &endpoint.title,
            path,
            method,
            sections: request_tree.iter().chain([&response_tree]).collect(),
        }
        .render();

        let api = ApiTs {
            title: &endpoint.title,
            path,
            method,
            function_name: &function_name,
            url: self.options.request_path.as_deref().unwrap_or(path),
            request: request.clone(),
            response_type: &response_type,
        }
        .render();

        tracing::debug!(
            path,
            function = %function_name,
            declarations = request_tree
                .iter()
                .chain([&response_tree])
                .map(|t| t.declarations().count())
                .sum::<usize>(),
            "generated endpoint"
        );

        Ok(Artifacts {
            types,
            api,
            request_type: request.type_name().map(str::to_string),
            response_type,
            function_name,
            diagnostics,
        })
    }
}
