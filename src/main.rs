use clap::Parser;
use dep_sync::config::{Manifest, Options};
use dep_sync::{constants, output, sync};
use std::path::PathBuf;

/// Clone or pull the git repositories listed in a JSON manifest, in order.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the manifest file.
    #[arg(short, long, default_value = constants::MANIFEST_FILE)]
    manifest: PathBuf,

    /// Suppress informational output; errors still print.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = Options { quiet: cli.quiet };

    let manifest = Manifest::load(&cli.manifest)?;
    output::print_run_start(&options, &cli.manifest, manifest.repositories.len());

    let cwd = std::env::current_dir()?;
    sync::sync_all(&cwd, &manifest.repositories, &options)?;

    output::print_complete(&options);
    Ok(())
}
