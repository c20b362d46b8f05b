use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use yapit_manifest::{CollisionPolicy, Config, Invocation, InvocationBuilder, RoleSuffix};

use super::UnwrapOrExit;
use crate::{
    ops::{self, WriteMode},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Interface id in the schema source
    #[arg(long)]
    pub id: Option<String>,

    /// Directory receiving types.ts and api.ts
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Schema source base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Project token for the schema source
    #[arg(long, env = "YAPI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// URL used by the generated client instead of the documented path
    #[arg(long)]
    pub request_path: Option<String>,

    /// Root type suffixes: short (Req/Res) or long (Request/Response)
    #[arg(long)]
    pub role_suffix: Option<RoleSuffix>,

    /// Name collisions: suffix (append a counter) or reject (fail the run)
    #[arg(long)]
    pub collisions: Option<CollisionPolicy>,

    /// Read shared settings from a yapit.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Keep files that already exist
    #[arg(long)]
    pub skip_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let config = self
            .config
            .as_ref()
            .map(|path| Config::from_file(path).unwrap_or_exit());
        let invocation = self.invocation(config.as_ref()).unwrap_or_exit();

        let mode = WriteMode {
            dry_run: self.dry_run,
            skip_existing: self.skip_existing,
        };
        let report = ops::generate(&invocation, mode).await?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Config first, then the matching `[[interfaces]]` entry, then flags.
    fn invocation(&self, config: Option<&Config>) -> yapit_manifest::Result<Invocation> {
        let mut builder = config
            .map(InvocationBuilder::from_config)
            .unwrap_or_default();
        let mut naming = config.map(|c| c.naming).unwrap_or_default();

        if let (Some(config), Some(id)) = (config, &self.id)
            && let Some(entry) = config.interfaces.iter().find(|e| e.id == *id)
        {
            builder = builder
                .output_dir(entry.output.clone())
                .request_path(entry.request_path.clone());
        }

        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(id) = &self.id {
            builder = builder.interface_id(id);
        }
        if let Some(output) = &self.output {
            builder = builder.output_dir(output);
        }
        if let Some(role_suffix) = self.role_suffix {
            naming.role_suffix = role_suffix;
        }
        if let Some(collisions) = self.collisions {
            naming.collisions = collisions;
        }

        builder
            .token(self.token.clone())
            .request_path(self.request_path.clone())
            .naming(naming)
            .build()
    }
}
