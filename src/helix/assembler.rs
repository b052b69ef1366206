// src/helix/assembler.rs
//! Multi-view diagram assembly with per-view deduplication.
//!
//! The same layer, module or template node, and the same dependency
//! edge, may appear in several diagrams, but within one diagram every
//! node and edge is created exactly once. Each view therefore owns its
//! caches; they are never shared across views or runs.

use std::collections::HashMap;

use super::hierarchy::{HierarchyIndex, LayerInfo, ModuleInfo};
use super::resolver::DependencyMap;
use crate::config::LayoutOptions;
use crate::diagram::{
    ContainerHandle, DiagramModel, Direction, EdgeHandle, EdgeKind, NodeHandle, NodeKind,
    StyleHints,
};
use crate::model::{Catalog, ItemId};

/// Composite key for one visual dependency edge: the ordered pair of
/// endpoint IDs at the view's granularity (template, module or layer).
type EdgeKey = (ItemId, ItemId);

/// One diagram under construction: its container plus the view-scoped
/// node and edge caches.
struct View {
    container: ContainerHandle,
    nodes: HashMap<ItemId, NodeHandle>,
    edges: HashMap<EdgeKey, EdgeHandle>,
    labels: HashMap<EdgeKey, String>,
}

impl View {
    fn open(model: &mut dyn DiagramModel, name: &str) -> Self {
        Self {
            container: model.create_container(name),
            nodes: HashMap::new(),
            edges: HashMap::new(),
            labels: HashMap::new(),
        }
    }

    /// Creates the node once per view. On first creation, a containment
    /// edge to `parent` is drawn when one is given; repeat requests
    /// return the cached handle untouched.
    fn node(
        &mut self,
        model: &mut dyn DiagramModel,
        kind: NodeKind,
        id: &ItemId,
        label: &str,
        parent: Option<NodeHandle>,
    ) -> NodeHandle {
        if let Some(&handle) = self.nodes.get(id) {
            return handle;
        }
        let handle = model.create_node(kind, id, label, self.container);
        self.nodes.insert(id.clone(), handle);
        if let Some(parent) = parent {
            model.create_edge(EdgeKind::Containment, handle, parent, self.container);
        }
        handle
    }

    /// Draws the visual edge for `key` once. Later requests merge into
    /// the existing edge by appending to its documentation; styling is
    /// decided by the first contributing dependency.
    fn dependency_edge(
        &mut self,
        model: &mut dyn DiagramModel,
        key: EdgeKey,
        source: NodeHandle,
        target: NodeHandle,
        description: &str,
        valid: bool,
    ) {
        if let Some(&handle) = self.edges.get(&key) {
            let text = self.labels.entry(key).or_default();
            text.push_str("  \n");
            text.push_str(description);
            model.set_label(handle, text);
            return;
        }
        let handle = model.create_edge(EdgeKind::Dependency, source, target, self.container);
        model.set_label(handle, description);
        if !valid {
            model.set_style(handle, StyleHints::invalid());
        }
        self.edges.insert(key.clone(), handle);
        self.labels.insert(key, description.to_string());
    }

    fn close(self, model: &mut dyn DiagramModel, direction: Direction) -> ContainerHandle {
        model.layout(self.container, direction);
        self.container
    }
}

/// Builds all six view families for every present layer and module.
///
/// Returns the handles of the populated containers, ready for the
/// rendering/export collaborator.
pub fn assemble(
    catalog: &Catalog,
    hierarchy: &HierarchyIndex,
    dependencies: &DependencyMap,
    layout: &LayoutOptions,
    model: &mut dyn DiagramModel,
) -> Vec<ContainerHandle> {
    let assembler = Assembler {
        catalog,
        hierarchy,
        dependencies,
        layout,
    };

    let mut containers = Vec::new();
    for layer_info in hierarchy.layers() {
        for module in &layer_info.modules {
            containers.push(assembler.module_dependencies(model, layer_info, module));
            containers.push(assembler.module_dependents(model, layer_info, module));
            containers.push(assembler.template_dependencies(model, layer_info, module));
            containers.push(assembler.template_dependents(model, layer_info, module));
        }
        containers.push(assembler.layer_dependencies(model, layer_info));
        containers.push(assembler.layer_dependents(model, layer_info));
    }
    containers
}

struct Assembler<'a> {
    catalog: &'a Catalog,
    hierarchy: &'a HierarchyIndex,
    dependencies: &'a DependencyMap,
    layout: &'a LayoutOptions,
}

impl Assembler<'_> {
    fn name_of(&self, id: &ItemId) -> String {
        self.catalog
            .resolve(id)
            .map_or_else(|| id.to_string(), |item| item.name.clone())
    }

    /// Module-level outbound view: one node per module, one edge per
    /// (source module, target module) pair.
    fn module_dependencies(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
        module: &ModuleInfo,
    ) -> ContainerHandle {
        let name = format!("{} Dependencies Diagram", self.name_of(&module.root));
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );
        let module_node = view.node(
            model,
            NodeKind::Folder,
            &module.root,
            &self.name_of(&module.root),
            Some(layer_node),
        );

        for template in &module.templates {
            for dep in self.dependencies.dependencies_of(template) {
                let Some(target_entry) = self.hierarchy.entry(&dep.target) else {
                    continue;
                };
                if target_entry.module_id == module.root {
                    continue;
                }
                let Some(target_layer) = self.hierarchy.layer_info(target_entry.layer) else {
                    continue;
                };

                let target_layer_node = view.node(
                    model,
                    NodeKind::Folder,
                    &target_layer.root,
                    &self.name_of(&target_layer.root),
                    None,
                );
                let target_module_node = view.node(
                    model,
                    NodeKind::Folder,
                    &target_entry.module_id,
                    &self.name_of(&target_entry.module_id),
                    Some(target_layer_node),
                );

                view.dependency_edge(
                    model,
                    (module.root.clone(), target_entry.module_id.clone()),
                    module_node,
                    target_module_node,
                    &dep.describe(self.catalog),
                    dep.verdict.is_valid,
                );
            }
        }

        view.close(model, self.layout.module_views)
    }

    /// Module-level inbound view: mirror of [`Self::module_dependencies`],
    /// iterating inbound edges instead of outbound.
    fn module_dependents(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
        module: &ModuleInfo,
    ) -> ContainerHandle {
        let name = format!("{} Dependents Diagram", self.name_of(&module.root));
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );
        let module_node = view.node(
            model,
            NodeKind::Folder,
            &module.root,
            &self.name_of(&module.root),
            Some(layer_node),
        );

        for template in &module.templates {
            for dep in self.dependencies.dependents_of(template) {
                let Some(source_entry) = self.hierarchy.entry(&dep.source) else {
                    continue;
                };
                if source_entry.module_id == module.root {
                    continue;
                }
                let Some(source_layer) = self.hierarchy.layer_info(source_entry.layer) else {
                    continue;
                };

                let source_layer_node = view.node(
                    model,
                    NodeKind::Folder,
                    &source_layer.root,
                    &self.name_of(&source_layer.root),
                    None,
                );
                let source_module_node = view.node(
                    model,
                    NodeKind::Folder,
                    &source_entry.module_id,
                    &self.name_of(&source_entry.module_id),
                    Some(source_layer_node),
                );

                view.dependency_edge(
                    model,
                    (source_entry.module_id.clone(), module.root.clone()),
                    source_module_node,
                    module_node,
                    &dep.describe(self.catalog),
                    dep.verdict.is_valid,
                );
            }
        }

        view.close(model, self.layout.module_views)
    }

    /// Template-level outbound view: the module's templates and their
    /// cross-module base templates, each inside its module and layer.
    fn template_dependencies(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
        module: &ModuleInfo,
    ) -> ContainerHandle {
        let name = format!(
            "{} Templates Dependencies Diagram",
            self.name_of(&module.root)
        );
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );
        let module_node = view.node(
            model,
            NodeKind::Folder,
            &module.root,
            &self.name_of(&module.root),
            Some(layer_node),
        );

        for template in &module.templates {
            let template_node = view.node(
                model,
                NodeKind::Template,
                template,
                &self.name_of(template),
                Some(module_node),
            );

            for dep in self.dependencies.dependencies_of(template) {
                let Some(target_entry) = self.hierarchy.entry(&dep.target) else {
                    continue;
                };
                if target_entry.module_id == module.root {
                    continue;
                }
                let Some(target_layer) = self.hierarchy.layer_info(target_entry.layer) else {
                    continue;
                };

                let target_layer_node = view.node(
                    model,
                    NodeKind::Folder,
                    &target_layer.root,
                    &self.name_of(&target_layer.root),
                    None,
                );
                let target_module_node = view.node(
                    model,
                    NodeKind::Folder,
                    &target_entry.module_id,
                    &self.name_of(&target_entry.module_id),
                    Some(target_layer_node),
                );
                let target_template_node = view.node(
                    model,
                    NodeKind::Template,
                    &dep.target,
                    &self.name_of(&dep.target),
                    Some(target_module_node),
                );

                view.dependency_edge(
                    model,
                    (template.clone(), dep.target.clone()),
                    template_node,
                    target_template_node,
                    &dep.describe(self.catalog),
                    dep.verdict.is_valid,
                );
            }
        }

        view.close(model, self.layout.template_views)
    }

    /// Template-level inbound view.
    fn template_dependents(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
        module: &ModuleInfo,
    ) -> ContainerHandle {
        let name = format!(
            "{} Templates Dependents Diagram",
            self.name_of(&module.root)
        );
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );
        let module_node = view.node(
            model,
            NodeKind::Folder,
            &module.root,
            &self.name_of(&module.root),
            Some(layer_node),
        );

        for template in &module.templates {
            let template_node = view.node(
                model,
                NodeKind::Template,
                template,
                &self.name_of(template),
                Some(module_node),
            );

            for dep in self.dependencies.dependents_of(template) {
                let Some(source_entry) = self.hierarchy.entry(&dep.source) else {
                    continue;
                };
                if source_entry.module_id == module.root {
                    continue;
                }
                let Some(source_layer) = self.hierarchy.layer_info(source_entry.layer) else {
                    continue;
                };

                let source_layer_node = view.node(
                    model,
                    NodeKind::Folder,
                    &source_layer.root,
                    &self.name_of(&source_layer.root),
                    None,
                );
                let source_module_node = view.node(
                    model,
                    NodeKind::Folder,
                    &source_entry.module_id,
                    &self.name_of(&source_entry.module_id),
                    Some(source_layer_node),
                );
                let source_template_node = view.node(
                    model,
                    NodeKind::Template,
                    &dep.source,
                    &self.name_of(&dep.source),
                    Some(source_module_node),
                );

                view.dependency_edge(
                    model,
                    (dep.source.clone(), template.clone()),
                    source_template_node,
                    template_node,
                    &dep.describe(self.catalog),
                    dep.verdict.is_valid,
                );
            }
        }

        view.close(model, self.layout.template_views)
    }

    /// Layer-level outbound view: one node per layer, one edge per
    /// (source layer, target layer) pair, cross-layer edges only.
    fn layer_dependencies(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
    ) -> ContainerHandle {
        let name = format!(
            "{} Layer Dependencies Diagram",
            self.name_of(&layer_info.root)
        );
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );

        for module in &layer_info.modules {
            for template in &module.templates {
                for dep in self.dependencies.dependencies_of(template) {
                    let Some(target_entry) = self.hierarchy.entry(&dep.target) else {
                        continue;
                    };
                    if target_entry.layer == layer_info.layer {
                        continue;
                    }
                    let Some(target_layer) = self.hierarchy.layer_info(target_entry.layer)
                    else {
                        continue;
                    };

                    let target_node = view.node(
                        model,
                        NodeKind::Folder,
                        &target_layer.root,
                        &self.name_of(&target_layer.root),
                        None,
                    );

                    view.dependency_edge(
                        model,
                        (layer_info.root.clone(), target_layer.root.clone()),
                        layer_node,
                        target_node,
                        &dep.describe(self.catalog),
                        dep.verdict.is_valid,
                    );
                }
            }
        }

        view.close(model, self.layout.layer_views)
    }

    /// Layer-level inbound view.
    fn layer_dependents(
        &self,
        model: &mut dyn DiagramModel,
        layer_info: &LayerInfo,
    ) -> ContainerHandle {
        let name = format!(
            "{} Layer Dependents Diagram",
            self.name_of(&layer_info.root)
        );
        let mut view = View::open(model, &name);

        let layer_node = view.node(
            model,
            NodeKind::Folder,
            &layer_info.root,
            &self.name_of(&layer_info.root),
            None,
        );

        for module in &layer_info.modules {
            for template in &module.templates {
                for dep in self.dependencies.dependents_of(template) {
                    let Some(source_entry) = self.hierarchy.entry(&dep.source) else {
                        continue;
                    };
                    if source_entry.layer == layer_info.layer {
                        continue;
                    }
                    let Some(source_layer) = self.hierarchy.layer_info(source_entry.layer)
                    else {
                        continue;
                    };

                    let source_node = view.node(
                        model,
                        NodeKind::Folder,
                        &source_layer.root,
                        &self.name_of(&source_layer.root),
                        None,
                    );

                    view.dependency_edge(
                        model,
                        (source_layer.root.clone(), layer_info.root.clone()),
                        source_node,
                        layer_node,
                        &dep.describe(self.catalog),
                        dep.verdict.is_valid,
                    );
                }
            }
        }

        view.close(model, self.layout.layer_views)
    }
}
