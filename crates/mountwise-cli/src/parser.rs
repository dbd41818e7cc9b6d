//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for mount-aware data directory recommendations.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "mountwise")]
#[command(about = "Recommend mount-aware data directories for cluster configuration")]
#[command(version)]
pub struct Cli {
    /// JSON settings file (selection policy, extra reserved prefixes, ignore override)
    #[arg(long = "settings", global = true, env = "MOUNTWISE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
