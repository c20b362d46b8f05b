use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use yapit_manifest::Config;

use super::UnwrapOrExit;
use crate::{
    ops::{self, WriteMode},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BatchCommand {
    /// Path to yapit.toml (defaults to ./yapit.toml)
    #[arg(short, long, default_value = "yapit.toml")]
    pub config: PathBuf,

    /// Project token for the schema source, overriding the config
    #[arg(long, env = "YAPI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Keep files that already exist
    #[arg(long)]
    pub skip_existing: bool,
}

impl BatchCommand {
    /// Run the batch command
    pub async fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config).unwrap_or_exit();
        let mut invocations = config.invocations().unwrap_or_exit();
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            for invocation in &mut invocations {
                invocation.source.token = Some(token.clone());
            }
        }

        let mode = WriteMode {
            dry_run: self.dry_run,
            skip_existing: self.skip_existing,
        };
        let report = ops::batch(invocations, mode).await;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            eyre::bail!(
                "{} of {} interfaces failed",
                report.failures.len(),
                report.total()
            );
        }
        Ok(())
    }
}
