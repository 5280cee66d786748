use crate::cli::CliContext;
use crate::core::orchestrator;
use crate::util::privilege;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    /// Print a count of applied, skipped, and failed groups at the end
    #[arg(long)]
    pub summary: bool,
}

/// Per-group problems are reported on stdout and never turn into an error.
pub fn run(ctx: &CliContext, args: ApplyArgs) -> Result<()> {
    if !privilege::is_root() && !ctx.config.permissions.is_empty() {
        eprintln!("warning: not running as root; changing group ownership may fail");
    }

    let mut out = io::stdout().lock();
    let report =
        orchestrator::run(&ctx.system, &mut out, &ctx.config).context("write status output")?;

    if args.summary {
        writeln!(
            out,
            "Summary: {} applied, {} skipped, {} failed",
            report.applied(),
            report.skipped(),
            report.failed()
        )?;
    }
    Ok(())
}
