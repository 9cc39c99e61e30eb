//! Renderer-to-symbology engine for map layers.
//!
//! Given an ESRI-style renderer definition (simple / unique-value /
//! class-breaks) this crate:
//! - draws compact SVG icons for vector symbols ([`icon`]),
//! - resolves which symbol applies to a feature's attributes ([`classify`]),
//! - builds a legend enumerating every renderer branch ([`legend`]),
//! - cross-references legend icons back onto the renderer ([`enhance`]),
//! - packages identify (click-to-query) results ([`identify`]).
//!
//! Everything is synchronous and pure apart from tracing. The intended
//! lifecycle: parse the renderer at layer-load time, `build_legend`, then
//! `enhance`; afterwards classify features concurrently at will.

pub mod classify;
pub mod enhance;
pub mod icon;
pub mod identify;
pub mod legend;
pub mod renderer;
pub mod symbol;

pub use classify::{classify, icon_for, symbol_for, Classification};
pub use enhance::enhance;
pub use icon::{blank_icon, draw_icon, CANVAS_SIZE};
pub use identify::{identify_feature, IdentifyResult};
pub use legend::{build_legend, Legend, LegendEntry, LegendLayer, FALLBACK_LABEL};
pub use renderer::{
    ClassBreakInfo, ClassBreaksRenderer, Renderer, SimpleRenderer, UniqueValueInfo,
    UniqueValueRenderer,
};
pub use symbol::{
    FillStyle, FillSymbol, LineStyle, LineSymbol, MarkerStyle, MarkerSymbol, PictureSymbol,
    Symbol, TextSymbol,
};
