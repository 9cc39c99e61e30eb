//! Renderer enhancement: attaching legend icons to renderer branches.

use crate::legend::Legend;
use crate::renderer::Renderer;
use std::collections::HashMap;
use tracing::warn;

/// Attach to every renderer branch the data URI of the legend entry sharing
/// its label, returning the enhanced renderer. The input legend is read
/// from its single layer section.
///
/// This is a pure transform: callers swap the returned value in for the
/// original, so classification never observes a half-enhanced renderer.
///
/// Caller contract: labels must be unique within one renderer. Two branches
/// sharing a label silently collide in the label lookup (last legend entry
/// wins); this is not defended against.
pub fn enhance(renderer: Renderer, legend: &Legend) -> Renderer {
    let icons: HashMap<&str, String> = match legend.layer() {
        Some(layer) => layer
            .legend
            .iter()
            .map(|entry| (entry.label.as_str(), entry.data_uri()))
            .collect(),
        None => {
            warn!("legend has no layer section, renderer left without icons");
            HashMap::new()
        }
    };

    let icon_for = |label: &str| icons.get(label).cloned();

    match renderer {
        Renderer::Simple(mut r) => {
            r.icon = icon_for(&r.label);
            Renderer::Simple(r)
        }
        Renderer::UniqueValue(mut r) => {
            for info in &mut r.unique_value_infos {
                info.icon = icon_for(&info.label);
            }
            if let Some(label) = &r.default_label {
                r.default_icon = icon_for(label);
            }
            Renderer::UniqueValue(r)
        }
        Renderer::ClassBreaks(mut r) => {
            for info in &mut r.class_break_infos {
                info.icon = icon_for(&info.label);
            }
            if let Some(label) = &r.default_label {
                r.default_icon = icon_for(label);
            }
            Renderer::ClassBreaks(r)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::{LegendEntry, LegendLayer};

    fn legend_with(entries: Vec<LegendEntry>) -> Legend {
        Legend {
            layers: vec![LegendLayer {
                layer_id: 0,
                legend: entries,
            }],
        }
    }

    fn entry(label: &str, markup: &str) -> LegendEntry {
        LegendEntry {
            label: label.to_string(),
            image_data: markup.to_string(),
            content_type: "image/svg+xml".to_string(),
            base64: false,
        }
    }

    #[test]
    fn test_simple_renderer_gets_its_icon() {
        let renderer: Renderer = serde_json::from_str(
            r#"{
                "type": "simple",
                "label": "All",
                "symbol": {"type": "marker", "style": "circle", "size": 8}
            }"#,
        )
        .unwrap();
        let legend = legend_with(vec![entry("All", "<svg a/>")]);

        match enhance(renderer, &legend) {
            Renderer::Simple(r) => {
                assert_eq!(r.icon.as_deref(), Some("data:image/svg+xml,<svg a/>"));
            }
            other => panic!("unexpected renderer kind: {:?}", other),
        }
    }

    #[test]
    fn test_missing_label_leaves_branch_bare() {
        let renderer: Renderer = serde_json::from_str(
            r#"{
                "type": "simple",
                "label": "Unlisted",
                "symbol": {"type": "marker", "style": "circle", "size": 8}
            }"#,
        )
        .unwrap();
        let legend = legend_with(vec![entry("Other", "<svg/>")]);

        match enhance(renderer, &legend) {
            Renderer::Simple(r) => assert!(r.icon.is_none()),
            other => panic!("unexpected renderer kind: {:?}", other),
        }
    }

    #[test]
    fn test_empty_legend_leaves_renderer_bare() {
        let renderer: Renderer = serde_json::from_str(
            r#"{
                "type": "uniqueValue",
                "field1": "F",
                "uniqueValueInfos": [
                    {"value": "v", "label": "lbl",
                     "symbol": {"type": "marker", "style": "circle", "size": 8}}
                ]
            }"#,
        )
        .unwrap();
        let legend = Legend { layers: vec![] };

        match enhance(renderer, &legend) {
            Renderer::UniqueValue(r) => {
                assert!(r.unique_value_infos[0].icon.is_none());
            }
            other => panic!("unexpected renderer kind: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_labels_last_write_wins() {
        let renderer: Renderer = serde_json::from_str(
            r#"{
                "type": "simple",
                "label": "dup",
                "symbol": {"type": "marker", "style": "circle", "size": 8}
            }"#,
        )
        .unwrap();
        let legend = legend_with(vec![entry("dup", "<svg one/>"), entry("dup", "<svg two/>")]);

        match enhance(renderer, &legend) {
            Renderer::Simple(r) => {
                assert_eq!(r.icon.as_deref(), Some("data:image/svg+xml,<svg two/>"));
            }
            other => panic!("unexpected renderer kind: {:?}", other),
        }
    }
}
