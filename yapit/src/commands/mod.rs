mod batch;
mod check;
mod generate;

use batch::BatchCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for yapit_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "yapit")]
#[command(version)]
#[command(about = "Generate TypeScript declarations and axios clients from YApi interfaces")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Batch(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate types.ts and api.ts for one interface
    Generate(GenerateCommand),

    /// Generate every interface listed in yapit.toml
    Batch(BatchCommand),

    /// Validate yapit.toml without contacting the schema source
    Check(CheckCommand),
}
