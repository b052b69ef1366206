// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "helixdoc",
    version,
    about = "Helix architecture diagrams and validation for template catalogs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build all Helix diagrams and write the JSON export
    Generate {
        /// Catalog snapshot (JSON)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
        /// Configuration file
        #[arg(long, default_value = "helixdoc.toml")]
        config: PathBuf,
        /// Output file for the diagram export
        #[arg(long, short, default_value = "helixdoc.diagrams.json")]
        out: PathBuf,
        /// Suppress the statistics summary
        #[arg(long)]
        quiet: bool,
    },
    /// Check layering only; exits nonzero when violations are found
    Validate {
        /// Catalog snapshot (JSON)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
        /// Configuration file
        #[arg(long, default_value = "helixdoc.toml")]
        config: PathBuf,
    },
    /// Print solution statistics
    Stats {
        /// Catalog snapshot (JSON)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
        /// Configuration file
        #[arg(long, default_value = "helixdoc.toml")]
        config: PathBuf,
    },
}
