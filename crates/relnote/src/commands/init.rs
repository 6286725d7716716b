//! Initialize command.

use anyhow::{Context, Result, bail};
use clap::Args;
use relnote_config::{CONFIG_FILE_NAME, Config, save_config};
use tracing::info;

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: InitArgs) -> Result<()> {
    let path = std::env::current_dir()
        .context("failed to read current directory")?
        .join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    save_config(&path, &Config::default())
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "wrote configuration");
    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}
