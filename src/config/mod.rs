// src/config/mod.rs
//! Run configuration: the Helix layer map, layout directions and the
//! documentation title, loaded from `helixdoc.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagram::Direction;
use crate::error::{HelixdocError, Result};
use crate::model::ItemId;

/// The three fixed Helix layers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Foundation,
    Feature,
    Project,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Foundation, Layer::Feature, Layer::Project];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Layer::Foundation => "Foundation",
            Layer::Feature => "Feature",
            Layer::Project => "Project",
        }
    }

    /// Position in the fixed Foundation/Feature/Project ordering.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Layer::Foundation => 0,
            Layer::Feature => 1,
            Layer::Project => 2,
        }
    }
}

/// Root and module folders configured for one layer. A layer without a
/// root is absent and skipped by every downstream stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSpec {
    pub root: Option<ItemId>,
    pub modules: Vec<ItemId>,
}

/// Maps the three fixed layers onto the catalog tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerMap {
    pub foundation: LayerSpec,
    pub feature: LayerSpec,
    pub project: LayerSpec,
}

impl LayerMap {
    #[must_use]
    pub fn spec(&self, layer: Layer) -> &LayerSpec {
        match layer {
            Layer::Foundation => &self.foundation,
            Layer::Feature => &self.feature,
            Layer::Project => &self.project,
        }
    }

    /// True when no layer has a configured root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Layer::ALL.iter().all(|layer| self.spec(*layer).root.is_none())
    }

    /// Resolves the layer owning the given layer-root ID.
    #[must_use]
    pub fn layer_by_root(&self, id: &ItemId) -> Option<Layer> {
        Layer::ALL
            .into_iter()
            .find(|layer| self.spec(*layer).root.as_ref() == Some(id))
    }
}

/// Per-family layout directions, applied when a view is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub module_views: Direction,
    pub template_views: Direction,
    pub layer_views: Direction,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            module_views: Direction::LeftRight,
            template_views: Direction::LeftRight,
            layer_views: Direction::LeftRight,
        }
    }
}

/// Top-level configuration file (`helixdoc.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub layers: LayerMap,
    pub layout: LayoutOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            layers: LayerMap::default(),
            layout: LayoutOptions::default(),
        }
    }
}

impl Config {
    /// Loads the configuration file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| HelixdocError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(toml::from_str(&raw)?)
    }
}
