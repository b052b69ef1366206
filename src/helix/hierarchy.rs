// src/helix/hierarchy.rs
//! Flattens the configured layer map into template lookup tables.

use std::collections::HashMap;

use crate::config::{Layer, LayerMap};
use crate::model::{Catalog, ItemId, ItemKind};

/// Where one template sits in the Helix architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEntry {
    pub template_id: ItemId,
    pub module_id: ItemId,
    pub layer: Layer,
}

/// A module root and the templates reachable under it, in document order.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub root: ItemId,
    pub templates: Vec<ItemId>,
}

/// A present layer: its resolved root and configured modules.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    pub layer: Layer,
    pub root: ItemId,
    pub modules: Vec<ModuleInfo>,
}

/// Index over every template reachable from a configured module root.
#[derive(Debug, Default)]
pub struct HierarchyIndex {
    layers: Vec<LayerInfo>,
    entries: HashMap<ItemId, HierarchyEntry>,
}

impl HierarchyIndex {
    /// Present layers, in fixed Foundation → Feature → Project order.
    #[must_use]
    pub fn layers(&self) -> &[LayerInfo] {
        &self.layers
    }

    #[must_use]
    pub fn layer_info(&self, layer: Layer) -> Option<&LayerInfo> {
        self.layers.iter().find(|info| info.layer == layer)
    }

    #[must_use]
    pub fn entry(&self, template: &ItemId) -> Option<&HierarchyEntry> {
        self.entries.get(template)
    }

    pub fn entries(&self) -> impl Iterator<Item = &HierarchyEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the hierarchy index for every configured layer.
///
/// A template reachable from two module roots keeps the entry written
/// last: layers are processed Foundation → Feature → Project and
/// modules in their configured order, and that order is the contract.
/// Unresolvable roots are reported as warnings and skipped; the run
/// continues with whatever resolves.
pub fn build_index(
    catalog: &Catalog,
    layers: &LayerMap,
    warnings: &mut Vec<String>,
) -> HierarchyIndex {
    let mut index = HierarchyIndex::default();

    for layer in Layer::ALL {
        let spec = layers.spec(layer);
        let Some(root) = &spec.root else {
            continue;
        };
        if catalog.resolve(root).is_none() {
            warnings.push(format!(
                "{} layer root \"{root}\" does not resolve to a catalog item; skipping the layer",
                layer.label()
            ));
            continue;
        }

        let mut info = LayerInfo {
            layer,
            root: root.clone(),
            modules: Vec::new(),
        };

        for module_root in &spec.modules {
            if catalog.resolve(module_root).is_none() {
                warnings.push(format!(
                    "module root \"{module_root}\" in the {} layer does not resolve to a catalog item; skipping the module",
                    layer.label()
                ));
                continue;
            }

            let templates = collect_templates(catalog, module_root);
            for template_id in &templates {
                index.entries.insert(
                    template_id.clone(),
                    HierarchyEntry {
                        template_id: template_id.clone(),
                        module_id: module_root.clone(),
                        layer,
                    },
                );
            }
            info.modules.push(ModuleInfo {
                root: module_root.clone(),
                templates,
            });
        }

        index.layers.push(info);
    }

    index
}

/// Every template under `root`, folders traversed transparently. A
/// module root that is itself a template counts as its only template.
fn collect_templates(catalog: &Catalog, root: &ItemId) -> Vec<ItemId> {
    let mut out = Vec::new();
    collect_into(catalog, root, &mut out);
    out
}

fn collect_into(catalog: &Catalog, id: &ItemId, out: &mut Vec<ItemId>) {
    let Some(item) = catalog.resolve(id) else {
        return;
    };
    match &item.kind {
        ItemKind::Template { .. } => out.push(item.id.clone()),
        ItemKind::Folder => {
            for child in catalog.children(id) {
                collect_into(catalog, child, out);
            }
        }
    }
}
