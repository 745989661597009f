//! Command-line interface definitions.

pub mod list;
pub mod output;
pub mod screen;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rosterman - a single-screen student roster manager.
#[derive(Parser, Debug)]
#[command(name = "rosterman")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive roster screen (default)
    Screen,

    /// Print the roster and exit
    List,
}

/// Arguments shared by every command.
#[derive(Parser, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "rosterman.toml")]
    pub config: PathBuf,

    /// Override the database path from the config file
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
