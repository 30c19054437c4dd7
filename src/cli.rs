//! CLI definitions for gearbox.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gearbox CLI.
#[derive(Parser)]
#[command(name = "gearbox")]
#[command(about = "Named adapter registries for data stores, authorizers and notifiers")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.gearbox/config.toml)
    #[arg(short, long, global = true, env = "GEARBOX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the configured registries and print their collections (default)
    Show {
        /// Only print this registry (datamanager, authorization, notifier)
        #[arg(short, long)]
        registry: Option<String>,

        /// JSON request to add to the selected registry, applied in order
        #[arg(long, requires = "registry")]
        add: Vec<String>,

        /// JSON request to remove from the selected registry, applied after adds
        #[arg(long, requires = "registry")]
        remove: Vec<String>,
    },

    /// Validate the configuration file
    Validate,
}
