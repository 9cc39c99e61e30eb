//! Common types shared across the map-symbology crates.

pub mod attributes;
pub mod color;
pub mod error;
pub mod layer;
pub mod lod;

pub use attributes::{AttributeValue, Attributes};
pub use color::Color;
pub use error::{SymbologyError, SymbologyResult};
pub use layer::{LayerCapability, LayerInfo, LayerKind};
pub use lod::{resolve_level, Lod};
