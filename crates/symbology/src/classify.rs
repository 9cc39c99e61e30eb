//! Renderer classification: resolving which symbol and icon apply to a
//! feature's attributes.

use crate::renderer::{ClassBreaksRenderer, Renderer, UniqueValueRenderer};
use crate::symbol::Symbol;
use gis_common::Attributes;
use tracing::debug;

/// Result of classifying one feature against a renderer. Both fields are
/// empty when the feature misses every branch and the renderer has no
/// default configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classification<'a> {
    /// Icon reference attached during enhancement, if any.
    pub icon: Option<&'a str>,

    /// The matched symbol definition.
    pub symbol: Option<&'a Symbol>,
}

/// Resolve the symbol and icon for a feature. Never panics; a feature that
/// matches nothing yields the renderer's default, or an empty classification
/// if no default is configured.
pub fn classify<'a>(attributes: &Attributes, renderer: &'a Renderer) -> Classification<'a> {
    match renderer {
        Renderer::Simple(r) => Classification {
            icon: r.icon.as_deref(),
            symbol: Some(&r.symbol),
        },
        Renderer::UniqueValue(r) => classify_unique_value(attributes, r),
        Renderer::ClassBreaks(r) => classify_class_breaks(attributes, r),
    }
}

/// Convenience projection of [`classify`] to the icon reference.
pub fn icon_for<'a>(attributes: &Attributes, renderer: &'a Renderer) -> Option<&'a str> {
    classify(attributes, renderer).icon
}

/// Convenience projection of [`classify`] to the symbol.
pub fn symbol_for<'a>(attributes: &Attributes, renderer: &'a Renderer) -> Option<&'a Symbol> {
    classify(attributes, renderer).symbol
}

fn classify_unique_value<'a>(
    attributes: &Attributes,
    renderer: &'a UniqueValueRenderer,
) -> Classification<'a> {
    let key = composite_key(attributes, renderer);

    // First match wins: entry order is the priority order on duplicate keys.
    for info in &renderer.unique_value_infos {
        if info.value == key {
            return Classification {
                icon: info.icon.as_deref(),
                symbol: Some(&info.symbol),
            };
        }
    }

    debug!(key = %key, field1 = %renderer.field1, "no unique-value match, using default");
    Classification {
        icon: renderer.default_icon.as_deref(),
        symbol: renderer.default_symbol.as_ref(),
    }
}

/// Build the composite lookup key from the configured fields: `field1`'s
/// coerced value, then `", "` plus each further configured field's value.
/// Non-string attribute values must stringify identically to how the
/// renderer's lookup keys were built server-side; see
/// [`gis_common::AttributeValue::as_key_string`].
fn composite_key(attributes: &Attributes, renderer: &UniqueValueRenderer) -> String {
    let field_key = |field: &str| {
        attributes
            .get(field)
            .map(|v| v.as_key_string())
            .unwrap_or_default()
    };

    let mut key = field_key(&renderer.field1);
    if let Some(field2) = &renderer.field2 {
        key.push_str(", ");
        key.push_str(&field_key(field2));
    }
    if let Some(field3) = &renderer.field3 {
        key.push_str(", ");
        key.push_str(&field_key(field3));
    }
    key
}

fn classify_class_breaks<'a>(
    attributes: &Attributes,
    renderer: &'a ClassBreaksRenderer,
) -> Classification<'a> {
    let default = Classification {
        icon: renderer.default_icon.as_deref(),
        symbol: renderer.default_symbol.as_ref(),
    };

    let value = match attributes.get(&renderer.field).and_then(|v| v.as_number()) {
        Some(v) => v,
        None => {
            debug!(field = %renderer.field, "no numeric value for class-breaks field");
            return default;
        }
    };

    // Low-end out of range.
    if value < renderer.min_value {
        return default;
    }

    // Each break's effective range is (previous upper bound, this upper
    // bound], with min_value - 1 standing in below the first break. Entry
    // order alone defines the ranges.
    let mut lower = renderer.min_value - 1.0;
    for info in &renderer.class_break_infos {
        if lower < value && value <= info.max_value {
            return Classification {
                icon: info.icon.as_deref(),
                symbol: Some(&info.symbol),
            };
        }
        lower = info.max_value;
    }

    // Above the last upper bound.
    default
}
