//! Legend construction: one label/icon pair per renderer branch.

use crate::icon::{blank_icon, draw_icon};
use crate::renderer::Renderer;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Label substituted when a legend entry cannot be drawn.
pub const FALLBACK_LABEL: &str = "Error!";

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// A layer legend document. Exactly one layer section is read and written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub layers: Vec<LegendLayer>,
}

/// The legend section for one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayer {
    pub layer_id: usize,
    pub legend: Vec<LegendEntry>,
}

/// One legend row: a label and an addressable image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub label: String,

    /// SVG markup, or a base64 payload for picture symbols.
    pub image_data: String,

    pub content_type: String,

    /// Whether `image_data` is base64-encoded.
    #[serde(rename = "base", default)]
    pub base64: bool,
}

impl LegendEntry {
    /// Render this entry's image as a self-contained data URI. Generated
    /// SVG markup embeds without escaping thanks to single-quoted
    /// attributes.
    pub fn data_uri(&self) -> String {
        if self.base64 {
            format!("data:{};base64,{}", self.content_type, self.image_data)
        } else {
            format!("data:{},{}", self.content_type, self.image_data)
        }
    }
}

impl Legend {
    /// The single layer section this legend is scoped to.
    pub fn layer(&self) -> Option<&LegendLayer> {
        self.layers.first()
    }
}

/// Build a legend for one renderer: one entry per branch in renderer order,
/// then a trailing default entry if a default symbol is configured.
///
/// Entry construction is individually contained: an entry whose symbol
/// cannot be drawn becomes a blank fallback image labeled
/// [`FALLBACK_LABEL`], and the remaining entries still build.
pub fn build_legend(renderer: &Renderer, layer_id: usize) -> Legend {
    let mut entries = Vec::new();

    match renderer {
        Renderer::Simple(r) => {
            entries.push(legend_entry(&r.symbol, &r.label));
        }
        Renderer::UniqueValue(r) => {
            for info in &r.unique_value_infos {
                entries.push(legend_entry(&info.symbol, &info.label));
            }
            if let Some(default) = &r.default_symbol {
                entries.push(legend_entry(default, r.default_label.as_deref().unwrap_or("")));
            }
        }
        Renderer::ClassBreaks(r) => {
            for info in &r.class_break_infos {
                entries.push(legend_entry(&info.symbol, &info.label));
            }
            if let Some(default) = &r.default_symbol {
                entries.push(legend_entry(default, r.default_label.as_deref().unwrap_or("")));
            }
        }
    }

    Legend {
        layers: vec![LegendLayer {
            layer_id,
            legend: entries,
        }],
    }
}

/// Project one symbol to a legend entry.
///
/// Vector symbols route through the icon drawer. Picture symbols pass their
/// embedded image through verbatim; the reference may be one the consumer
/// cannot resolve, and picture-fill borders are not represented. Text
/// symbols are unsupported and yield the blank fallback.
fn legend_entry(symbol: &Symbol, label: &str) -> LegendEntry {
    match symbol {
        Symbol::Marker(_) | Symbol::Line(_) | Symbol::Fill(_) => match draw_icon(symbol) {
            Ok(markup) => LegendEntry {
                label: label.to_string(),
                image_data: markup,
                content_type: SVG_CONTENT_TYPE.to_string(),
                base64: false,
            },
            Err(err) => {
                error!(kind = symbol.kind(), %err, "failed to draw legend icon");
                fallback_entry()
            }
        },
        Symbol::PictureMarker(p) | Symbol::PictureFill(p) => LegendEntry {
            label: label.to_string(),
            image_data: p.image_data.clone(),
            content_type: p.content_type.clone(),
            base64: true,
        },
        Symbol::Text(_) => {
            warn!("text symbols are not supported in legends");
            fallback_entry()
        }
    }
}

fn fallback_entry() -> LegendEntry {
    LegendEntry {
        label: FALLBACK_LABEL.to_string(),
        image_data: blank_icon(),
        content_type: SVG_CONTENT_TYPE.to_string(),
        base64: false,
    }
}
