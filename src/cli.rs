use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Scaffold Ease ViewModels and regenerate their `.ease.dart` files
#[derive(Debug, Parser)]
#[command(name = "ease-codegen", version, about)]
pub struct Cli {
    /// Print debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a ViewModel and its .ease.dart file
    New {
        /// ViewModel name (e.g. Counter, Cart, Auth); prompted for when omitted
        name: Option<String>,

        /// State type (e.g. int, String, CartState); prompted for when omitted
        #[arg(short, long)]
        state_type: Option<String>,

        /// Target directory (defaults to output.dir from the config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Regenerate .ease.dart files from their ViewModel .dart files
    Regenerate {
        /// A ViewModel .dart file, or a directory to regenerate recursively
        path: PathBuf,
    },
    /// Write a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
