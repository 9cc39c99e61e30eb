//! Symbol definitions as served in renderer JSON.
//!
//! Marker, line, and fill styles are closed enumerations: an unsupported
//! style string fails at deserialization instead of silently falling back
//! at draw time.

use gis_common::Color;
use serde::{Deserialize, Serialize};

/// How to paint one shape. Tagged by the `type` field of the symbol JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Symbol {
    #[serde(rename = "marker")]
    Marker(MarkerSymbol),

    #[serde(rename = "line")]
    Line(LineSymbol),

    #[serde(rename = "fill")]
    Fill(FillSymbol),

    #[serde(rename = "pictureMarker")]
    PictureMarker(PictureSymbol),

    #[serde(rename = "pictureFill")]
    PictureFill(PictureSymbol),

    /// Text symbols cannot be drawn as icons; legend construction degrades
    /// them to a blank fallback entry.
    #[serde(rename = "text")]
    Text(TextSymbol),
}

impl Symbol {
    /// Symbol kind name, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Symbol::Marker(_) => "marker",
            Symbol::Line(_) => "line",
            Symbol::Fill(_) => "fill",
            Symbol::PictureMarker(_) => "pictureMarker",
            Symbol::PictureFill(_) => "pictureFill",
            Symbol::Text(_) => "text",
        }
    }

    /// Whether this symbol routes through the vector icon drawer.
    pub fn is_drawable(&self) -> bool {
        matches!(self, Symbol::Marker(_) | Symbol::Line(_) | Symbol::Fill(_))
    }
}

/// A point marker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSymbol {
    pub style: MarkerStyle,

    /// Fill color; absent means unfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Requested marker size in canvas units. Oversized markers are clamped
    /// at draw time, never scaled up.
    #[serde(default = "default_marker_size")]
    pub size: f64,

    /// Rotation in degrees about the canvas center.
    #[serde(default)]
    pub angle: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<LineSymbol>,

    /// Literal SVG path data, only meaningful for `MarkerStyle::Path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Marker glyph shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerStyle {
    Circle,
    Cross,
    Diamond,
    Square,
    X,
    Triangle,
    /// A custom glyph; the marker's `path` string is passed through as-is.
    Path,
}

/// A line symbol, also used as the outline of markers and fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSymbol {
    #[serde(default)]
    pub style: LineStyle,

    /// Stroke color; absent means no stroke.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default = "default_line_width")]
    pub width: f64,
}

/// Named dash styles. `Null` is the "no line" style and strokes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    DashDot,
    DashDotDot,
    Dot,
    LongDash,
    LongDashDot,
    ShortDash,
    ShortDashDot,
    ShortDashDotDot,
    ShortDot,
    Null,
}

/// An area fill symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillSymbol {
    #[serde(default)]
    pub style: FillStyle,

    /// Fill color; absent means unfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<LineSymbol>,
}

/// Area fill styles. Hatch patterns have no icon representation and
/// degrade to an unfilled shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FillStyle {
    #[default]
    Solid,
    BackwardDiagonal,
    ForwardDiagonal,
    Cross,
    DiagonalCross,
    Horizontal,
    Vertical,
    Null,
}

impl FillStyle {
    /// Whether this style paints the interior. Pattern fills are
    /// representationally unsupported and render unfilled.
    pub fn is_solid(&self) -> bool {
        matches!(self, FillStyle::Solid)
    }
}

/// An embedded raster image symbol (picture marker or picture fill).
/// Passed through legend construction verbatim; never routed to the
/// vector icon drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureSymbol {
    /// Base64-encoded image payload.
    pub image_data: String,

    /// MIME type of the payload (e.g. `image/png`).
    pub content_type: String,
}

/// A text symbol. Unsupported for icon generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSymbol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

fn default_marker_size() -> f64 {
    10.0
}

fn default_line_width() -> f64 {
    1.0
}
