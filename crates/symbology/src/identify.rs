//! Identify (click-to-query) boundary types.
//!
//! Attribute retrieval is the caller's concern; this module only projects
//! an already-fetched feature through the classifier into a displayable
//! result.

use crate::classify::classify;
use crate::renderer::Renderer;
use crate::symbol::Symbol;
use gis_common::Attributes;
use serde::{Deserialize, Serialize};

/// Identify result for one feature of one layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResult {
    /// Position of the queried layer within its map service.
    pub layer_id: usize,

    /// Icon data URI for the feature's renderer branch, if enhanced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// The symbol the feature draws with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,

    /// The feature's attributes, as fetched.
    pub attributes: Attributes,
}

/// Classify one feature and package the result for display.
pub fn identify_feature(
    layer_id: usize,
    attributes: &Attributes,
    renderer: &Renderer,
) -> IdentifyResult {
    let classification = classify(attributes, renderer);
    IdentifyResult {
        layer_id,
        icon: classification.icon.map(str::to_string),
        symbol: classification.symbol.cloned(),
        attributes: attributes.clone(),
    }
}
