// src/diagram/memory.rs
//! In-memory diagram model, used by the JSON export and by tests.

use serde::Serialize;

use super::{
    ContainerHandle, DiagramModel, Direction, EdgeHandle, EdgeKind, NodeHandle, NodeKind,
    StyleHints,
};
use crate::model::ItemId;

#[derive(Debug, Clone, Serialize)]
pub struct ContainerRecord {
    pub name: String,
    pub layout: Option<Direction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeRecord {
    pub kind: NodeKind,
    pub item: ItemId,
    pub label: String,
    pub container: ContainerHandle,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeRecord {
    pub kind: EdgeKind,
    pub source: NodeHandle,
    pub target: NodeHandle,
    pub container: ContainerHandle,
    pub label: String,
    pub style: StyleHints,
}

/// Records every collaborator call. Handles are indexes into the
/// record vectors, so lookups in assertions are cheap.
#[derive(Debug, Default, Serialize)]
pub struct MemoryDiagramModel {
    pub containers: Vec<ContainerRecord>,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl MemoryDiagramModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn container_named(&self, name: &str) -> Option<ContainerHandle> {
        self.containers
            .iter()
            .position(|c| c.name == name)
            .map(|i| ContainerHandle(i as u32))
    }

    #[must_use]
    pub fn nodes_in(&self, container: ContainerHandle) -> Vec<&NodeRecord> {
        self.nodes
            .iter()
            .filter(|n| n.container == container)
            .collect()
    }

    #[must_use]
    pub fn edges_in(&self, container: ContainerHandle) -> Vec<&EdgeRecord> {
        self.edges
            .iter()
            .filter(|e| e.container == container)
            .collect()
    }

    #[must_use]
    pub fn dependency_edges_in(&self, container: ContainerHandle) -> Vec<&EdgeRecord> {
        self.edges
            .iter()
            .filter(|e| e.container == container && e.kind == EdgeKind::Dependency)
            .collect()
    }

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&NodeRecord> {
        self.nodes.get(handle.0 as usize)
    }
}

impl DiagramModel for MemoryDiagramModel {
    fn create_container(&mut self, name: &str) -> ContainerHandle {
        self.containers.push(ContainerRecord {
            name: name.to_string(),
            layout: None,
        });
        ContainerHandle((self.containers.len() - 1) as u32)
    }

    fn create_node(
        &mut self,
        kind: NodeKind,
        id: &ItemId,
        label: &str,
        container: ContainerHandle,
    ) -> NodeHandle {
        self.nodes.push(NodeRecord {
            kind,
            item: id.clone(),
            label: label.to_string(),
            container,
        });
        NodeHandle((self.nodes.len() - 1) as u32)
    }

    fn create_edge(
        &mut self,
        kind: EdgeKind,
        source: NodeHandle,
        target: NodeHandle,
        container: ContainerHandle,
    ) -> EdgeHandle {
        self.edges.push(EdgeRecord {
            kind,
            source,
            target,
            container,
            label: String::new(),
            style: StyleHints::default(),
        });
        EdgeHandle((self.edges.len() - 1) as u32)
    }

    fn set_label(&mut self, edge: EdgeHandle, text: &str) {
        if let Some(record) = self.edges.get_mut(edge.0 as usize) {
            record.label = text.to_string();
        }
    }

    fn set_style(&mut self, edge: EdgeHandle, style: StyleHints) {
        if let Some(record) = self.edges.get_mut(edge.0 as usize) {
            record.style = style;
        }
    }

    fn layout(&mut self, container: ContainerHandle, direction: Direction) {
        if let Some(record) = self.containers.get_mut(container.0 as usize) {
            record.layout = Some(direction);
        }
    }
}
