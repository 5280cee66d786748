//! CLI routing and command dispatch.

use crate::core::config::{ConfigOverrides, ProvisionConfig};
use crate::core::system::UnixSystem;
use crate::models::provision_config::PermissionEntry;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod apply;
pub mod plan;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub config: ProvisionConfig,
    pub system: UnixSystem,
}

#[derive(Parser, Debug)]
#[command(
    name = "goamet-dirperm",
    version,
    about = "Provision a folder and grant POSIX group permissions on it"
)]
pub struct Cli {
    /// Config file (default: ./dirperm.toml or /etc/goamet/dirperm.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the folder is created in
    #[arg(long, global = true, value_name = "PATH")]
    pub base_path: Option<PathBuf>,

    /// Name of the folder to provision
    #[arg(long, global = true, value_name = "NAME")]
    pub folder_name: Option<String>,

    /// Grant a tier to a group; repeatable, replaces the config file's map
    #[arg(
        long = "grant",
        global = true,
        value_name = "GROUP=TIER",
        value_parser = PermissionEntry::parse_assignment
    )]
    pub grants: Vec<PermissionEntry>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let overrides = ConfigOverrides {
            base_path: self.base_path,
            folder_name: self.folder_name,
            grants: self.grants,
        };
        let config = ProvisionConfig::resolve(self.config, overrides)?;
        let ctx = CliContext {
            config,
            system: UnixSystem,
        };

        match self.command.unwrap_or_default() {
            Commands::Apply(args) => apply::run(&ctx, args),
            Commands::Plan(args) => plan::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the folder and apply group permissions (default)
    Apply(apply::ApplyArgs),
    /// Preview what apply would do without changing anything
    Plan(plan::PlanArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Apply(apply::ApplyArgs::default())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
