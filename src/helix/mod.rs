// src/helix/mod.rs
//! The Helix architecture analysis engine.
//!
//! One invocation processes one immutable catalog snapshot: the layer
//! map is flattened into a hierarchy index, dependencies are resolved
//! and validated against the layering rules, diagrams are assembled on
//! the external diagram model, and statistics are aggregated. Nothing
//! here persists between runs.

pub mod assembler;
pub mod hierarchy;
pub mod report;
pub mod resolver;
pub mod stats;
pub mod validator;

#[cfg(test)]
mod tests;

pub use hierarchy::{HierarchyEntry, HierarchyIndex};
pub use resolver::{Dependency, DependencyMap};
pub use stats::{HelixStatistics, LayerStatistics, ModuleStatistics, SolutionStatistics};
pub use validator::{ValidationError, ValidationReport, Verdict};

use crate::config::LayerMap;
use crate::model::Catalog;

/// Everything one analysis run derives from a catalog snapshot.
#[derive(Debug)]
pub struct Analysis {
    pub hierarchy: HierarchyIndex,
    pub dependencies: DependencyMap,
    pub validation: ValidationReport,
    pub statistics: SolutionStatistics,
    /// Soft failures: configuration gaps and dangling references.
    pub warnings: Vec<String>,
}

/// Runs the full analysis pipeline over one immutable snapshot.
///
/// Never fails: configuration gaps and dangling references degrade to
/// warnings and the result is always a best-effort complete set.
#[must_use]
pub fn analyze(catalog: &Catalog, layers: &LayerMap) -> Analysis {
    let mut warnings = Vec::new();
    let hierarchy = hierarchy::build_index(catalog, layers, &mut warnings);
    let dependencies = resolver::resolve(catalog, &hierarchy, &mut warnings);
    let validation = validator::collect_report(catalog, &hierarchy, &dependencies);
    let statistics = stats::aggregate(catalog, &hierarchy, &dependencies);
    Analysis {
        hierarchy,
        dependencies,
        validation,
        statistics,
        warnings,
    }
}
