//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use dpk_common::PlatformEnv;

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Publish and install platform app packages
#[derive(Parser)]
#[command(
    name = "dpkctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Platform environment (overrides DTLPY_ENV)
    #[arg(long, global = true, value_enum)]
    pub env: Option<PlatformEnv>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Publish the package and install or update its app in a project
    Install(commands::install::InstallArgs),

    /// Show which user the configured token belongs to
    Whoami,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            env,
            command,
        } = self;
        let ctx = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
            env,
        });
        match command {
            Command::Install(args) => commands::install::run(&ctx, &args).await,
            Command::Whoami => commands::whoami::run(&ctx).await,
            Command::Version => {
                commands::version::run(&ctx);
                Ok(())
            }
        }
    }
}
