// src/cli/mod.rs
//! Command handlers for the `helixdoc` binary.

pub mod args;

pub use args::{Cli, Commands};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::diagram::memory::MemoryDiagramModel;
use crate::helix::{self, assembler, report, Analysis};
use crate::model::{loader, Catalog};

/// JSON export wrapper: the configured title plus the recorded model.
#[derive(Serialize)]
struct Export<'a> {
    title: &'a str,
    #[serde(flatten)]
    model: &'a MemoryDiagramModel,
}

/// Loads inputs, runs the engine, assembles all views and writes the
/// diagram export.
pub fn handle_generate(snapshot: &Path, config: &Path, out: &Path, quiet: bool) -> Result<()> {
    let (catalog, cfg, analysis) = run_analysis(snapshot, config)?;

    let mut model = MemoryDiagramModel::new();
    let containers = assembler::assemble(
        &catalog,
        &analysis.hierarchy,
        &analysis.dependencies,
        &cfg.layout,
        &mut model,
    );

    let export = serde_json::to_string_pretty(&Export {
        title: &cfg.title,
        model: &model,
    })
    .context("serializing diagram export")?;
    fs::write(out, export).with_context(|| format!("writing {}", out.display()))?;

    report::print_validation(&analysis.validation);
    if !quiet {
        report::print_statistics(&analysis.statistics);
    }
    println!(
        "{} {} diagrams exported to {}",
        "OK".green().bold(),
        containers.len(),
        out.display()
    );
    Ok(())
}

/// Runs validation only. Returns true when violations were detected so
/// the binary can exit nonzero.
pub fn handle_validate(snapshot: &Path, config: &Path) -> Result<bool> {
    let (_catalog, _cfg, analysis) = run_analysis(snapshot, config)?;
    report::print_validation(&analysis.validation);
    Ok(analysis.validation.errors_detected)
}

/// Prints the statistics summary.
pub fn handle_stats(snapshot: &Path, config: &Path) -> Result<()> {
    let (_catalog, _cfg, analysis) = run_analysis(snapshot, config)?;
    report::print_statistics(&analysis.statistics);
    Ok(())
}

fn run_analysis(snapshot: &Path, config: &Path) -> Result<(Catalog, Config, Analysis)> {
    let catalog = loader::load_catalog(snapshot)
        .with_context(|| format!("loading snapshot {}", snapshot.display()))?;
    let cfg = Config::load(config)
        .with_context(|| format!("loading configuration {}", config.display()))?;

    if cfg.layers.is_empty() {
        eprintln!(
            "{} no Helix layers configured in {}; only solution totals will be produced",
            "warning:".yellow().bold(),
            config.display()
        );
    }

    let analysis = helix::analyze(&catalog, &cfg.layers);
    report::print_warnings(&analysis.warnings);
    Ok((catalog, cfg, analysis))
}
