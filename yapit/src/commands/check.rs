use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use yapit_manifest::Config;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to yapit.toml (defaults to ./yapit.toml)
    #[arg(short, long, default_value = "yapit.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(&config, &self.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
