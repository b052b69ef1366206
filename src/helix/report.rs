// src/helix/report.rs
//! Console output for validation results and statistics.

use colored::Colorize;

use super::stats::SolutionStatistics;
use super::validator::ValidationReport;

/// Prints the layering validation report.
pub fn print_validation(report: &ValidationReport) {
    if report.is_clean() {
        println!(
            "{}",
            "  ✓ All module dependencies respect the Helix layering.".green()
        );
        return;
    }

    println!(
        "\n{} {} layering {}",
        "HELIX VALIDATION".cyan().bold(),
        report.total().to_string().red(),
        if report.total() == 1 {
            "violation"
        } else {
            "violations"
        },
    );

    for layer in &report.by_layer {
        if layer.entries.is_empty() {
            continue;
        }
        println!(
            "\n{} {} layer ({})",
            "▸".yellow(),
            layer.layer.label().yellow().bold(),
            layer.entries.len()
        );
        for error in &layer.entries {
            println!(
                "    {} → {}",
                error.dependent_path,
                error.dependency_path.red()
            );
            println!("      module: {}", error.module_name.dimmed());
        }
    }
}

/// Prints the solution statistics summary.
pub fn print_statistics(stats: &SolutionStatistics) {
    println!("\n{}", "SOLUTION STATISTICS".cyan().bold());
    println!(
        "  templates: {}  folders: {}  fields: {}  inheritance edges: {}",
        stats.total_templates,
        stats.total_template_folders,
        stats.total_template_fields,
        stats.total_template_inheritance
    );

    let Some(helix) = &stats.helix else {
        println!("  {}", "no Helix layers configured".dimmed());
        return;
    };

    for layer in &helix.layers {
        println!(
            "  {}: {} modules, {} templates, {} dependencies, {} dependents",
            layer.layer.label().bold(),
            layer.total_modules(),
            layer.total_templates(),
            layer.total_module_dependencies(),
            layer.total_module_dependents()
        );
    }
    println!(
        "  total: {} modules, {} templates, {} module dependencies",
        helix.total_modules(),
        helix.total_templates(),
        helix.total_module_dependencies()
    );
}

/// Prints engine warnings (configuration gaps, dangling references).
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}
