//! Normalized layer records for the heterogeneous layer types wrapped by
//! the host map client.

use serde::{Deserialize, Serialize};

/// The kinds of map layer the client normalizes behind one record model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    /// Vector feature layer with attributes and a renderer.
    Feature,
    /// Dynamic/composite map service rendered server-side.
    Dynamic,
    /// Pre-rendered tile cache.
    Tiled,
    /// Single georeferenced image.
    Image,
    /// OGC WMS endpoint.
    Wms,
}

/// Optional abilities a layer record may expose. Callers pattern-match on
/// capability instead of catching not-implemented errors from stub methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerCapability {
    /// Supports click-to-query identify requests.
    Identify,
    /// Carries a renderer and can produce a legend.
    Legend,
    /// Exposes per-feature attribute records.
    Attributes,
    /// Restricted to a range of scale levels.
    ScaleRange,
}

/// A normalized layer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInfo {
    /// Position of this layer within its map service.
    pub layer_id: usize,

    /// Human-readable layer name.
    pub name: String,

    pub kind: LayerKind,

    /// Capabilities this layer actually supports.
    pub capabilities: Vec<LayerCapability>,

    /// Minimum scale at which the layer draws (0 = no limit).
    #[serde(default)]
    pub min_scale: f64,

    /// Maximum scale at which the layer draws (0 = no limit).
    #[serde(default)]
    pub max_scale: f64,
}

impl LayerInfo {
    /// Check whether this layer supports a given capability.
    pub fn supports(&self, cap: LayerCapability) -> bool {
        self.capabilities.contains(&cap)
    }
}

impl LayerKind {
    /// Default capability set for each layer kind. Feature layers carry the
    /// full set; raster-backed kinds only answer identify requests.
    pub fn default_capabilities(&self) -> Vec<LayerCapability> {
        match self {
            LayerKind::Feature => vec![
                LayerCapability::Identify,
                LayerCapability::Legend,
                LayerCapability::Attributes,
                LayerCapability::ScaleRange,
            ],
            LayerKind::Dynamic => vec![
                LayerCapability::Identify,
                LayerCapability::Legend,
                LayerCapability::ScaleRange,
            ],
            LayerKind::Tiled => vec![LayerCapability::ScaleRange],
            LayerKind::Image => vec![],
            LayerKind::Wms => vec![LayerCapability::Identify],
        }
    }
}
