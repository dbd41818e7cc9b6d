//! Available subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Input documents shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Host inventory document (`{"items": [{"Hosts": {...}}]}`)
    #[arg(long)]
    pub hosts: PathBuf,

    /// Services document carrying `configurations` (including `cluster-env`)
    #[arg(long)]
    pub services: PathBuf,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the inventory with ignored mount points removed
    Filter {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Print the mount-qualified variations of a base path
    Variations {
        #[command(flatten)]
        inputs: InputArgs,
        /// Default directory to remap onto shared mounts
        #[arg(long)]
        base: String,
        /// Component that will own the directory
        #[arg(long, default_value = "DATANODE")]
        component: String,
    },

    /// Recommend values for path properties of one configuration group
    Recommend {
        #[command(flatten)]
        inputs: InputArgs,
        /// Configuration group to update (e.g. "hdfs-site")
        #[arg(long)]
        group: String,
        /// Property as NAME:COMPONENT:BASE_PATH:single|multi (repeatable)
        #[arg(long = "property", required = true)]
        properties: Vec<String>,
        /// Configuration being built; its values win over the services document
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the full configuration with recommendations merged in
        #[arg(long)]
        merged: bool,
    },
}
