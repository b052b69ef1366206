// src/helix/stats.rs
//! Statistics aggregation over the completed hierarchy and dependency
//! maps.
//!
//! Module counts exclude intra-module edges, matching what the
//! module-level views draw. Layer totals are element-wise sums over
//! modules; solution totals add raw catalog-wide counts regardless of
//! Helix membership.

use serde::Serialize;

use super::hierarchy::{HierarchyIndex, ModuleInfo};
use super::resolver::DependencyMap;
use crate::config::Layer;
use crate::model::{Catalog, ItemId, ItemKind};

/// Counts for one module. Dependency and dependent totals count
/// cross-module edges only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleStatistics {
    pub module_id: ItemId,
    pub total_templates: usize,
    pub total_dependencies: usize,
    pub total_dependents: usize,
}

/// Per-layer statistics: the layer's modules plus summing accessors.
#[derive(Debug, Clone, Serialize)]
pub struct LayerStatistics {
    pub layer: Layer,
    pub modules: Vec<ModuleStatistics>,
}

impl LayerStatistics {
    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn total_templates(&self) -> usize {
        self.modules.iter().map(|m| m.total_templates).sum()
    }

    #[must_use]
    pub fn total_module_dependencies(&self) -> usize {
        self.modules.iter().map(|m| m.total_dependencies).sum()
    }

    #[must_use]
    pub fn total_module_dependents(&self) -> usize {
        self.modules.iter().map(|m| m.total_dependents).sum()
    }
}

/// Helix-wide sums over present layers.
#[derive(Debug, Clone, Serialize)]
pub struct HelixStatistics {
    pub layers: Vec<LayerStatistics>,
}

impl HelixStatistics {
    #[must_use]
    pub fn layer(&self, layer: Layer) -> Option<&LayerStatistics> {
        self.layers.iter().find(|stats| stats.layer == layer)
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.layers.iter().map(LayerStatistics::total_modules).sum()
    }

    #[must_use]
    pub fn total_templates(&self) -> usize {
        self.layers
            .iter()
            .map(LayerStatistics::total_templates)
            .sum()
    }

    #[must_use]
    pub fn total_module_dependencies(&self) -> usize {
        self.layers
            .iter()
            .map(LayerStatistics::total_module_dependencies)
            .sum()
    }

    #[must_use]
    pub fn total_module_dependents(&self) -> usize {
        self.layers
            .iter()
            .map(LayerStatistics::total_module_dependents)
            .sum()
    }
}

/// Solution-wide totals, Helix-indexed or not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolutionStatistics {
    pub total_templates: usize,
    pub total_template_folders: usize,
    pub total_template_fields: usize,
    pub total_template_inheritance: usize,
    /// Absent when no layer is configured.
    pub helix: Option<HelixStatistics>,
}

/// Computes statistics for the whole run.
#[must_use]
pub fn aggregate(
    catalog: &Catalog,
    hierarchy: &HierarchyIndex,
    dependencies: &DependencyMap,
) -> SolutionStatistics {
    let mut totals = SolutionStatistics::default();

    for item in catalog.iter() {
        match &item.kind {
            ItemKind::Folder => totals.total_template_folders += 1,
            ItemKind::Template {
                base_template_ids,
                fields,
            } => {
                totals.total_templates += 1;
                totals.total_template_fields += fields.len();
                totals.total_template_inheritance += base_template_ids.len();
            }
        }
    }

    if !hierarchy.layers().is_empty() {
        totals.helix = Some(helix_statistics(hierarchy, dependencies));
    }

    totals
}

fn helix_statistics(
    hierarchy: &HierarchyIndex,
    dependencies: &DependencyMap,
) -> HelixStatistics {
    let layers = hierarchy
        .layers()
        .iter()
        .map(|layer_info| LayerStatistics {
            layer: layer_info.layer,
            modules: layer_info
                .modules
                .iter()
                .map(|module| module_statistics(hierarchy, dependencies, module))
                .collect(),
        })
        .collect();
    HelixStatistics { layers }
}

fn module_statistics(
    hierarchy: &HierarchyIndex,
    dependencies: &DependencyMap,
    module: &ModuleInfo,
) -> ModuleStatistics {
    // Template count respects last-write-wins membership on templates
    // reachable from more than one module root.
    let owned: Vec<&ItemId> = module
        .templates
        .iter()
        .filter(|template| {
            hierarchy
                .entry(template)
                .map_or(false, |entry| entry.module_id == module.root)
        })
        .collect();

    let mut total_dependencies = 0;
    let mut total_dependents = 0;
    for template in &owned {
        total_dependencies += dependencies
            .dependencies_of(template)
            .iter()
            .filter(|dep| {
                hierarchy
                    .entry(&dep.target)
                    .map_or(false, |entry| entry.module_id != module.root)
            })
            .count();
        total_dependents += dependencies
            .dependents_of(template)
            .iter()
            .filter(|dep| {
                hierarchy
                    .entry(&dep.source)
                    .map_or(false, |entry| entry.module_id != module.root)
            })
            .count();
    }

    ModuleStatistics {
        module_id: module.root.clone(),
        total_templates: owned.len(),
        total_dependencies,
        total_dependents,
    }
}
