// src/model/mod.rs
//! The item model: an immutable snapshot of the template catalog.
//!
//! Items form a tree of folders with templates at the leaves. Templates
//! may name base templates (inheritance), which is the only kind of
//! cross-reference the engine cares about.

pub mod loader;

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, globally unique identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single field descriptor on a template. Opaque to the engine beyond
/// counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    pub name: String,
    #[serde(default)]
    pub field_type: String,
}

/// What an item is. Folders group; templates are leaves that may inherit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Folder,
    Template {
        #[serde(default)]
        base_template_ids: Vec<ItemId>,
        #[serde(default)]
        fields: Vec<TemplateField>,
    },
}

/// A node in the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Human-readable breadcrumb, e.g. `/templates/Feature/News`.
    pub path: String,
    #[serde(default)]
    pub parent: Option<ItemId>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    #[must_use]
    pub fn is_template(&self) -> bool {
        matches!(self.kind, ItemKind::Template { .. })
    }
}

/// Immutable catalog snapshot with id and containment indexes.
///
/// Built once from a flat item list; never mutated afterwards. Children
/// keep the insertion order of the source list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<ItemId, Item>,
    children: HashMap<ItemId, Vec<ItemId>>,
    roots: Vec<ItemId>,
}

impl Catalog {
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        let ids: HashSet<ItemId> = items.iter().map(|item| item.id.clone()).collect();

        let mut catalog = Catalog::default();
        for item in &items {
            match &item.parent {
                Some(parent) if ids.contains(parent) => catalog
                    .children
                    .entry(parent.clone())
                    .or_default()
                    .push(item.id.clone()),
                _ => catalog.roots.push(item.id.clone()),
            }
        }
        catalog.items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        catalog
    }

    #[must_use]
    pub fn resolve(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Direct children of a folder, in document order. Empty for leaves
    /// and unknown IDs.
    #[must_use]
    pub fn children(&self, id: &ItemId) -> &[ItemId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Declared base templates of a template, in declaration order.
    /// Empty for folders and unknown IDs.
    #[must_use]
    pub fn base_template_ids(&self, id: &ItemId) -> &[ItemId] {
        match self.resolve(id).map(|item| &item.kind) {
            Some(ItemKind::Template {
                base_template_ids, ..
            }) => base_template_ids.as_slice(),
            _ => &[],
        }
    }

    /// Items without a resolvable parent, in document order.
    #[must_use]
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
