// src/diagram/mod.rs
//! The diagram-model collaborator boundary.
//!
//! Rendering, sizing and export are external concerns. The engine only
//! asks the collaborator for containers, nodes and edges, and tells it
//! when a container is complete and may be laid out.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::model::ItemId;

/// Handle to a diagram container created by the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerHandle(pub u32);

/// Handle to a node view inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(pub u32);

/// Handle to an edge view inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Folder,
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Dependency,
    Containment,
}

/// Flow direction for automatic layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
    Auto,
}

/// Presentation hints for a created element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHints {
    pub line_color: Option<String>,
}

impl StyleHints {
    /// The distinguished styling for invalid dependencies.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            line_color: Some("#cc3333".to_string()),
        }
    }
}

/// Everything the engine needs from a diagramming backend.
///
/// Implementations own element identity: the engine guarantees it never
/// asks for the same logical node or edge twice within one container,
/// and implementations may treat a repeated request as corruption.
pub trait DiagramModel {
    fn create_container(&mut self, name: &str) -> ContainerHandle;

    fn create_node(
        &mut self,
        kind: NodeKind,
        id: &ItemId,
        label: &str,
        container: ContainerHandle,
    ) -> NodeHandle;

    fn create_edge(
        &mut self,
        kind: EdgeKind,
        source: NodeHandle,
        target: NodeHandle,
        container: ContainerHandle,
    ) -> EdgeHandle;

    fn set_label(&mut self, edge: EdgeHandle, text: &str);

    fn set_style(&mut self, edge: EdgeHandle, style: StyleHints);

    fn layout(&mut self, container: ContainerHandle, direction: Direction);
}
