//! Renderer definitions mapping feature attributes to symbols.

use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A server-declared renderer. Tagged by the `type` field of the renderer
/// JSON. Each branch carries an optional `icon` slot, filled once by
/// [`crate::enhance::enhance`] after legend construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Renderer {
    #[serde(rename = "simple")]
    Simple(SimpleRenderer),

    #[serde(rename = "uniqueValue")]
    UniqueValue(UniqueValueRenderer),

    #[serde(rename = "classBreaks")]
    ClassBreaks(ClassBreaksRenderer),
}

/// One symbol for every feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRenderer {
    pub symbol: Symbol,

    #[serde(default)]
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Exact-match classification on a composite key of one to three fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueRenderer {
    pub field1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field3: Option<String>,

    /// Value entries in priority order: the first entry whose key matches
    /// wins on duplicate keys.
    pub unique_value_infos: Vec<UniqueValueInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_symbol: Option<Symbol>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon: Option<String>,
}

/// One unique-value entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueInfo {
    /// Composite lookup key. Multi-field keys join values with `", "`.
    pub value: String,

    #[serde(default)]
    pub label: String,

    pub symbol: Symbol,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Range classification of one numeric field into contiguous half-open
/// ranges. Entry order defines the ranges; entries are not re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreaksRenderer {
    pub field: String,

    /// Lower bound of the first break. Values below it classify to the
    /// default symbol.
    #[serde(default)]
    pub min_value: f64,

    pub class_break_infos: Vec<ClassBreakInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_symbol: Option<Symbol>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon: Option<String>,
}

/// One class break. Its effective range is `(previous maxValue, maxValue]`,
/// with the renderer's `minValue` bounding the first break from below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreakInfo {
    pub max_value: f64,

    #[serde(default)]
    pub label: String,

    pub symbol: Symbol,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
