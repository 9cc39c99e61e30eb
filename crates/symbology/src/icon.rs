//! Procedural SVG icon generation for vector symbols.
//!
//! Every icon is drawn on a fixed 32x32 canvas. Attribute values are
//! single-quoted so the markup can be embedded in a `data:` URI without
//! further escaping.

use crate::symbol::{FillSymbol, LineStyle, LineSymbol, MarkerStyle, MarkerSymbol, Symbol};
use gis_common::color::{paint, paint_opacity};
use gis_common::{SymbologyError, SymbologyResult};

/// Icon canvas width and height in SVG user units.
pub const CANVAS_SIZE: f64 = 32.0;

/// Marker geometry is inset at least this far from every canvas edge so
/// oversized symbols never clip.
const EDGE_INSET: f64 = 2.0;

/// Draw one vector symbol as a 32x32 SVG icon.
///
/// Only marker, line, and fill symbols are drawable; picture and text
/// symbols are the caller's responsibility to pre-filter and produce an
/// `UnsupportedSymbol` error here.
pub fn draw_icon(symbol: &Symbol) -> SymbologyResult<String> {
    match symbol {
        Symbol::Marker(m) => Ok(svg_document(&marker_body(m))),
        Symbol::Line(l) => Ok(svg_document(&line_body(l))),
        Symbol::Fill(f) => Ok(svg_document(&fill_body(f))),
        other => Err(SymbologyError::UnsupportedSymbol(other.kind().to_string())),
    }
}

/// A blank icon: the empty 32x32 canvas. Used as the fallback image for
/// legend entries that cannot be drawn.
pub fn blank_icon() -> String {
    svg_document("")
}

/// Wrap drawn primitives in the fixed-size canvas container.
fn svg_document(body: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{0}' height='{0}' viewBox='0 0 {0} {0}'>{1}</svg>",
        CANVAS_SIZE, body
    )
}

fn marker_body(marker: &MarkerSymbol) -> String {
    let center = CANVAS_SIZE / 2.0;
    let max_half = (CANVAS_SIZE - 2.0 * EDGE_INSET) / 2.0;
    let fill_attrs = fill_paint_attrs(marker.color.as_ref());
    let stroke_attrs = stroke_paint_attrs(marker.outline.as_ref());
    let rotate = format!(" transform='rotate({} {} {})'", marker.angle, center, center);

    if marker.style == MarkerStyle::Circle {
        // Radius is the requested half-size, capped so the circle stays
        // inside the edge inset at any configured size.
        let radius = (marker.size / 2.0).min(max_half);
        return format!(
            "<circle cx='{cx}' cy='{cy}' r='{r}'{fill}{stroke}{rotate}/>",
            cx = center,
            cy = center,
            r = radius,
            fill = fill_attrs,
            stroke = stroke_attrs,
            rotate = rotate,
        );
    }

    // Glyph markers draw inside a centered square bounding box with
    // half-extent clamped the same way as the circle radius.
    let half = marker.size.min(CANVAS_SIZE - 2.0 * EDGE_INSET) / 2.0;
    let left = center - half;
    let right = center + half;
    let top = center - half;
    let bottom = center + half;

    let path_data = match marker.style {
        MarkerStyle::Cross => format!(
            "M {cx} {top} L {cx} {bottom} M {left} {cy} L {right} {cy}",
            cx = center,
            cy = center,
            top = top,
            bottom = bottom,
            left = left,
            right = right,
        ),
        MarkerStyle::X => format!(
            "M {left} {top} L {right} {bottom} M {left} {bottom} L {right} {top}",
            left = left,
            right = right,
            top = top,
            bottom = bottom,
        ),
        MarkerStyle::Diamond => format!(
            "M {cx} {top} L {right} {cy} L {cx} {bottom} L {left} {cy} Z",
            cx = center,
            cy = center,
            top = top,
            bottom = bottom,
            left = left,
            right = right,
        ),
        MarkerStyle::Square => format!(
            "M {left} {top} L {right} {top} L {right} {bottom} L {left} {bottom} Z",
            left = left,
            right = right,
            top = top,
            bottom = bottom,
        ),
        MarkerStyle::Triangle => format!(
            "M {cx} {top} L {right} {bottom} L {left} {bottom} Z",
            cx = center,
            top = top,
            bottom = bottom,
            left = left,
            right = right,
        ),
        // Custom glyph: the symbol's literal path data, passed through.
        MarkerStyle::Path => marker.path.clone().unwrap_or_default(),
        MarkerStyle::Circle => unreachable!("circle handled above"),
    };

    format!(
        "<path d='{d}'{fill}{stroke}{rotate}/>",
        d = path_data,
        fill = fill_attrs,
        stroke = stroke_attrs,
        rotate = rotate,
    )
}

fn line_body(line: &LineSymbol) -> String {
    // One fixed diagonal reference segment across the icon.
    let near = EDGE_INSET;
    let far = CANVAS_SIZE - EDGE_INSET;
    format!(
        "<path d='M {x1} {y1} L {x2} {y2}' fill='none'{stroke}/>",
        x1 = near,
        y1 = far,
        x2 = far,
        y2 = near,
        stroke = stroke_paint_attrs(Some(line)),
    )
}

fn fill_body(fill: &FillSymbol) -> String {
    // Centered square inset 4 units from every edge.
    let inset = 4.0;
    let side = CANVAS_SIZE - 2.0 * inset;
    // Pattern fills have no icon representation; degrade to unfilled.
    let color = if fill.style.is_solid() {
        fill.color.as_ref()
    } else {
        None
    };
    format!(
        "<rect x='{x}' y='{y}' width='{w}' height='{h}'{fill}{stroke}/>",
        x = inset,
        y = inset,
        w = side,
        h = side,
        fill = fill_paint_attrs(color),
        stroke = stroke_paint_attrs(fill.outline.as_ref()),
    )
}

/// Fill attributes for an optionally colored shape. The even-odd fill rule
/// applies everywhere so self-intersecting custom paths render predictably.
fn fill_paint_attrs(color: Option<&gis_common::Color>) -> String {
    format!(
        " fill='{}' fill-opacity='{}' fill-rule='evenodd'",
        paint(color),
        paint_opacity(color)
    )
}

/// Stroke attributes for an optional outline. A missing outline and the
/// `null` line style both stroke nothing.
fn stroke_paint_attrs(outline: Option<&LineSymbol>) -> String {
    let outline = match outline {
        Some(l) if l.style != LineStyle::Null => l,
        _ => return " stroke='none'".to_string(),
    };
    let dash = match dash_array(outline.style) {
        Some(pattern) => format!(" stroke-dasharray='{}'", pattern),
        None => String::new(),
    };
    format!(
        " stroke='{}' stroke-opacity='{}' stroke-width='{}'{}",
        paint(outline.color.as_ref()),
        paint_opacity(outline.color.as_ref()),
        outline.width,
        dash
    )
}

/// Dash pattern for each named dash style. Solid and null styles have no
/// dash array (null never reaches here; it strokes nothing).
fn dash_array(style: LineStyle) -> Option<&'static str> {
    match style {
        LineStyle::Solid | LineStyle::Null => None,
        LineStyle::Dash => Some("8,4"),
        LineStyle::DashDot => Some("8,4,2,4"),
        LineStyle::DashDotDot => Some("8,4,2,4,2,4"),
        LineStyle::Dot => Some("2,4"),
        LineStyle::LongDash => Some("16,4"),
        LineStyle::LongDashDot => Some("16,4,2,4"),
        LineStyle::ShortDash => Some("4,4"),
        LineStyle::ShortDashDot => Some("4,4,2,4"),
        LineStyle::ShortDashDotDot => Some("4,4,2,4,2,4"),
        LineStyle::ShortDot => Some("2,2"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gis_common::Color;

    fn circle_marker(size: f64) -> Symbol {
        Symbol::Marker(MarkerSymbol {
            style: MarkerStyle::Circle,
            color: Some(Color::new(255, 0, 0, 255)),
            size,
            angle: 0.0,
            outline: None,
            path: None,
        })
    }

    #[test]
    fn test_circle_radius_clamped() {
        let svg = draw_icon(&circle_marker(100.0)).unwrap();
        assert!(svg.contains("r='14'"), "oversized circle must clamp: {}", svg);

        let svg = draw_icon(&circle_marker(12.0)).unwrap();
        assert!(svg.contains("r='6'"), "small circle keeps its size: {}", svg);
    }

    #[test]
    fn test_single_quote_attributes_only() {
        let svg = draw_icon(&circle_marker(8.0)).unwrap();
        assert!(!svg.contains('"'), "double quotes would break data URIs: {}", svg);
    }

    #[test]
    fn test_missing_color_paints_nothing() {
        let sym = Symbol::Marker(MarkerSymbol {
            style: MarkerStyle::Square,
            color: None,
            size: 10.0,
            angle: 0.0,
            outline: None,
            path: None,
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("fill='none'"));
        assert!(svg.contains("fill-opacity='0'"));
        assert!(svg.contains("stroke='none'"));
    }

    #[test]
    fn test_null_outline_style_strokes_nothing() {
        let sym = Symbol::Marker(MarkerSymbol {
            style: MarkerStyle::Diamond,
            color: Some(Color::new(0, 0, 255, 255)),
            size: 10.0,
            angle: 0.0,
            outline: Some(LineSymbol {
                style: LineStyle::Null,
                color: Some(Color::new(0, 0, 0, 255)),
                width: 2.0,
            }),
            path: None,
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("stroke='none'"));
        assert!(!svg.contains("stroke-width"));
    }

    #[test]
    fn test_custom_path_passed_through() {
        let sym = Symbol::Marker(MarkerSymbol {
            style: MarkerStyle::Path,
            color: Some(Color::new(0, 128, 0, 255)),
            size: 16.0,
            angle: 0.0,
            outline: None,
            path: Some("M 4 4 L 28 16 L 4 28 Z".to_string()),
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("d='M 4 4 L 28 16 L 4 28 Z'"));
    }

    #[test]
    fn test_rotation_about_canvas_center() {
        let sym = Symbol::Marker(MarkerSymbol {
            style: MarkerStyle::Triangle,
            color: Some(Color::new(0, 0, 0, 255)),
            size: 10.0,
            angle: 45.0,
            outline: None,
            path: None,
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("rotate(45 16 16)"));
    }

    #[test]
    fn test_line_dash_lookup() {
        let sym = Symbol::Line(LineSymbol {
            style: LineStyle::DashDot,
            color: Some(Color::new(0, 0, 0, 255)),
            width: 2.0,
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("stroke-dasharray='8,4,2,4'"));
        assert!(svg.contains("stroke-width='2'"));
    }

    #[test]
    fn test_fill_pattern_degrades_to_unfilled() {
        let sym = Symbol::Fill(FillSymbol {
            style: crate::symbol::FillStyle::DiagonalCross,
            color: Some(Color::new(255, 255, 0, 255)),
            outline: Some(LineSymbol {
                style: LineStyle::Solid,
                color: Some(Color::new(0, 0, 0, 255)),
                width: 1.0,
            }),
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("fill='none'"));
        assert!(svg.contains("stroke='rgb(0,0,0)'"));
    }

    #[test]
    fn test_fill_square_inset() {
        let sym = Symbol::Fill(FillSymbol {
            style: crate::symbol::FillStyle::Solid,
            color: Some(Color::new(10, 20, 30, 255)),
            outline: None,
        });
        let svg = draw_icon(&sym).unwrap();
        assert!(svg.contains("x='4' y='4' width='24' height='24'"));
    }

    #[test]
    fn test_unsupported_kinds_rejected() {
        let text: Symbol = serde_json::from_str(r#"{"type": "text", "text": "label"}"#).unwrap();
        assert!(matches!(
            draw_icon(&text),
            Err(SymbologyError::UnsupportedSymbol(_))
        ));
    }
}
