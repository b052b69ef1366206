// src/bin/helixdoc.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use helixdoc_core::cli::{self, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate {
            snapshot,
            config,
            out,
            quiet,
        } => cli::handle_generate(snapshot, config, out, *quiet),
        Commands::Validate { snapshot, config } => {
            if cli::handle_validate(snapshot, config)? {
                process::exit(1);
            }
            Ok(())
        }
        Commands::Stats { snapshot, config } => cli::handle_stats(snapshot, config),
    }
}
