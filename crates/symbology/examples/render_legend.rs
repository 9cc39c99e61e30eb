//! Build and enhance a legend for a sample class-breaks renderer, printing
//! each branch's data URI.
//!
//! Run with: cargo run -p symbology --example render_legend

use symbology::{build_legend, enhance, Renderer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let renderer_json = r#"{
        "type": "classBreaks",
        "field": "MAG",
        "minValue": 0,
        "classBreakInfos": [
            {"maxValue": 4, "label": "Minor",
             "symbol": {"type": "marker", "style": "circle", "size": 6,
                        "color": [255, 255, 0, 200],
                        "outline": {"style": "solid", "color": [0, 0, 0, 255], "width": 1}}},
            {"maxValue": 6, "label": "Moderate",
             "symbol": {"type": "marker", "style": "circle", "size": 12,
                        "color": [255, 128, 0, 220],
                        "outline": {"style": "solid", "color": [0, 0, 0, 255], "width": 1}}},
            {"maxValue": 10, "label": "Major",
             "symbol": {"type": "marker", "style": "circle", "size": 20,
                        "color": [255, 0, 0, 255],
                        "outline": {"style": "solid", "color": [0, 0, 0, 255], "width": 1}}}
        ],
        "defaultSymbol": {"type": "marker", "style": "x", "size": 8,
                          "color": [128, 128, 128, 255]},
        "defaultLabel": "Unclassified"
    }"#;

    let renderer: Renderer = match serde_json::from_str(renderer_json) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to parse renderer: {}", e);
            return;
        }
    };

    let legend = build_legend(&renderer, 0);
    let layer = legend.layer().expect("legend has one layer section");
    println!("Legend for layer {}:", layer.layer_id);
    for entry in &layer.legend {
        println!("  {:12} {}", entry.label, entry.data_uri());
    }

    let enhanced = enhance(renderer, &legend);
    println!(
        "\nEnhanced renderer:\n{}",
        serde_json::to_string_pretty(&enhanced).unwrap()
    );
}
