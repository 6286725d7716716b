//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate changelog sections from the commits between two releases.
#[derive(Debug, Parser)]
#[command(name = "relnote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the changelog section for a range of commits
    Generate(commands::generate::GenerateArgs),

    /// Write a default relnote configuration
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => commands::generate::run(args),
            Commands::Init(args) => commands::init::run(args),
        }
    }
}
