//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating `yapit.toml`.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub base_url: String,
    pub role_suffix: String,
    pub collisions: String,
    pub interfaces: Vec<CheckedInterface>,
}

/// One resolved `[[interfaces]]` entry.
#[derive(Debug)]
pub struct CheckedInterface {
    pub id: String,
    pub output: PathBuf,
    pub request_path: Option<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Source", &self.base_url);
        out.key_value(
            "Naming",
            &format!(
                "role_suffix = {}, collisions = {}",
                self.role_suffix, self.collisions
            ),
        );
        out.newline();

        let count = self.interfaces.len();
        out.section(&format!(
            "{} interface{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for interface in &self.interfaces {
            let mut line = format!("{} → {}", interface.id, interface.output.display());
            if let Some(path) = &interface.request_path {
                line.push_str(&format!(" ({})", path));
            }
            out.list_item(&line);
        }
    }
}
