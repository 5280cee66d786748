use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = goamet_dirperm::cli::Cli::parse();
    cli.run()
}
