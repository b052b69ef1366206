// src/helix/resolver.rs
//! Dependency and dependent resolution over the hierarchy index.
//!
//! Both maps are computed once per run and read repeatedly by the
//! diagram assembler across views. The per-template mapping step runs
//! on the rayon pool; merging and inversion stay sequential so the
//! resulting order never depends on thread scheduling.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::hierarchy::HierarchyIndex;
use super::validator::{self, Verdict};
use crate::model::{Catalog, ItemId};

/// A directed inheritance edge between two indexed templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub source: ItemId,
    pub target: ItemId,
    pub verdict: Verdict,
}

impl Dependency {
    /// Human-readable description, used as diagram edge documentation.
    #[must_use]
    pub fn describe(&self, catalog: &Catalog) -> String {
        let source = path_of(catalog, &self.source);
        let target = path_of(catalog, &self.target);
        format!("{{`{source}`}} -> {{`{target}`}}")
    }
}

fn path_of(catalog: &Catalog, id: &ItemId) -> String {
    catalog
        .resolve(id)
        .map_or_else(|| id.to_string(), |item| item.path.clone())
}

/// Outbound and inbound dependency lists for every indexed template.
#[derive(Debug, Default)]
pub struct DependencyMap {
    dependencies: HashMap<ItemId, Vec<Dependency>>,
    dependents: HashMap<ItemId, Vec<Dependency>>,
}

impl DependencyMap {
    /// Outbound edges of `template`, in base-template declaration
    /// order. Every indexed template has an entry, possibly empty.
    #[must_use]
    pub fn dependencies_of(&self, template: &ItemId) -> &[Dependency] {
        self.dependencies.get(template).map_or(&[], Vec::as_slice)
    }

    /// Inbound edges: every resolved dependency whose target is
    /// `template`. Every indexed template has an entry, possibly empty.
    #[must_use]
    pub fn dependents_of(&self, template: &ItemId) -> &[Dependency] {
        self.dependents.get(template).map_or(&[], Vec::as_slice)
    }

    /// Total number of resolved dependency edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }
}

/// Resolves dependencies for every indexed template, then inverts them
/// into dependent lists.
///
/// A base-template reference without a hierarchy entry is dropped with
/// a warning naming the offending template; it contributes to neither
/// map. Validity is classified at edge construction so every consumer
/// sees the same verdict.
#[must_use]
pub fn resolve(
    catalog: &Catalog,
    hierarchy: &HierarchyIndex,
    warnings: &mut Vec<String>,
) -> DependencyMap {
    // Deterministic worklist in hierarchy order. Templates reachable
    // from two module roots resolve once.
    let mut seen = HashSet::new();
    let ordered: Vec<&ItemId> = hierarchy
        .layers()
        .iter()
        .flat_map(|layer| layer.modules.iter())
        .flat_map(|module| module.templates.iter())
        .filter(|template| seen.insert((*template).clone()))
        .collect();

    let resolved: Vec<(ItemId, Vec<Dependency>, Vec<String>)> = ordered
        .par_iter()
        .map(|template| resolve_template(catalog, hierarchy, template))
        .collect();

    let mut map = DependencyMap::default();
    for (template, deps, mut warns) in resolved {
        warnings.append(&mut warns);
        map.dependents.entry(template.clone()).or_default();
        for dep in &deps {
            map.dependents
                .entry(dep.target.clone())
                .or_default()
                .push(dep.clone());
        }
        map.dependencies.insert(template, deps);
    }
    map
}

fn resolve_template(
    catalog: &Catalog,
    hierarchy: &HierarchyIndex,
    template: &ItemId,
) -> (ItemId, Vec<Dependency>, Vec<String>) {
    let mut warns = Vec::new();
    let Some(source_entry) = hierarchy.entry(template) else {
        return (template.clone(), Vec::new(), warns);
    };

    let mut deps = Vec::new();
    for base_id in catalog.base_template_ids(template) {
        let Some(target_entry) = hierarchy.entry(base_id) else {
            warns.push(format!(
                "base template \"{base_id}\" of \"{template}\" does not belong to a \
                 configured Helix module; dropping the dependency (check the layer map \
                 if the template's module should be included)"
            ));
            continue;
        };
        let verdict = validator::classify(source_entry, target_entry);
        deps.push(Dependency {
            source: template.clone(),
            target: base_id.clone(),
            verdict,
        });
    }
    (template.clone(), deps, warns)
}
