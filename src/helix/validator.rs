// src/helix/validator.rs
//! Layering rules for cross-module dependencies.
//!
//! The rule table is fixed: Project may depend downward on Feature and
//! Foundation, Feature only on Foundation, and Foundation modules may
//! depend on each other. Nothing depends upward or laterally within
//! Feature or Project. Same-module edges never reach the table.

use serde::Serialize;

use super::hierarchy::{HierarchyEntry, HierarchyIndex};
use super::resolver::DependencyMap;
use crate::config::Layer;
use crate::model::{Catalog, ItemId};

/// Outcome of checking one dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl Verdict {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Classifies a dependency between two indexed templates.
///
/// Pure and idempotent: the same pair of entries always yields the
/// same verdict.
#[must_use]
pub fn classify(source: &HierarchyEntry, target: &HierarchyEntry) -> Verdict {
    if source.module_id == target.module_id {
        return Verdict::valid();
    }
    match (source.layer, target.layer) {
        (Layer::Project, Layer::Project) => {
            Verdict::invalid("Project cannot depend on another Project module")
        }
        (Layer::Feature, Layer::Project) => {
            Verdict::invalid("Feature cannot depend on the Project layer")
        }
        (Layer::Foundation, Layer::Project) => {
            Verdict::invalid("Foundation cannot depend on the Project layer")
        }
        (Layer::Feature, Layer::Feature) => {
            Verdict::invalid("Feature cannot depend on another Feature module")
        }
        (Layer::Foundation, Layer::Feature) => {
            Verdict::invalid("Foundation cannot depend on the Feature layer")
        }
        // Foundation modules may fan out across their own layer, and
        // everything may flow downward.
        (Layer::Foundation, Layer::Foundation)
        | (Layer::Feature, Layer::Foundation)
        | (Layer::Project, Layer::Feature | Layer::Foundation) => Verdict::valid(),
    }
}

/// One recorded layering violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub layer_index: usize,
    pub module_name: String,
    pub dependent_path: String,
    pub dependency_path: String,
}

/// Violations for one layer, keyed by the dependent's layer.
#[derive(Debug, Clone, Serialize)]
pub struct LayerErrors {
    pub layer: Layer,
    pub entries: Vec<ValidationError>,
}

/// The run-level validation report.
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    pub errors_detected: bool,
    pub by_layer: Vec<LayerErrors>,
}

impl ValidationReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_layer.iter().map(|layer| layer.entries.len()).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.errors_detected
    }
}

/// Walks every resolved dependency and accumulates layering
/// violations, grouped by the dependent's layer.
///
/// Violations are expected, recoverable data: the walk annotates and
/// reports, it never aborts the run.
#[must_use]
pub fn collect_report(
    catalog: &Catalog,
    hierarchy: &HierarchyIndex,
    dependencies: &DependencyMap,
) -> ValidationReport {
    let mut by_layer: Vec<LayerErrors> = Layer::ALL
        .iter()
        .map(|layer| LayerErrors {
            layer: *layer,
            entries: Vec::new(),
        })
        .collect();

    // Walk in hierarchy order so the report is deterministic.
    for layer_info in hierarchy.layers() {
        for module in &layer_info.modules {
            let module_name = name_of(catalog, &module.root);
            for template in &module.templates {
                // Respect last-write-wins membership on templates
                // reachable from more than one module root.
                if hierarchy
                    .entry(template)
                    .map_or(true, |entry| entry.module_id != module.root)
                {
                    continue;
                }
                for dep in dependencies.dependencies_of(template) {
                    if dep.verdict.is_valid {
                        continue;
                    }
                    by_layer[layer_info.layer.index()].entries.push(ValidationError {
                        layer_index: layer_info.layer.index(),
                        module_name: module_name.clone(),
                        dependent_path: path_of(catalog, &dep.source),
                        dependency_path: path_of(catalog, &dep.target),
                    });
                }
            }
        }
    }

    let errors_detected = by_layer.iter().any(|layer| !layer.entries.is_empty());
    ValidationReport {
        errors_detected,
        by_layer,
    }
}

fn name_of(catalog: &Catalog, id: &ItemId) -> String {
    catalog
        .resolve(id)
        .map_or_else(|| id.to_string(), |item| item.name.clone())
}

fn path_of(catalog: &Catalog, id: &ItemId) -> String {
    catalog
        .resolve(id)
        .map_or_else(|| id.to_string(), |item| item.path.clone())
}
