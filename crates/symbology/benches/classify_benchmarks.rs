use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gis_common::{AttributeValue, Attributes};
use symbology::{classify, Renderer};

fn unique_value_renderer(entries: usize) -> Renderer {
    let infos: Vec<String> = (0..entries)
        .map(|i| {
            format!(
                r#"{{"value": "zone-{i}", "label": "Zone {i}",
                     "symbol": {{"type": "fill", "style": "solid", "color": [0, {}, 0, 255]}}}}"#,
                (i % 255)
            )
        })
        .collect();
    serde_json::from_str(&format!(
        r#"{{"type": "uniqueValue", "field1": "ZONE", "uniqueValueInfos": [{}]}}"#,
        infos.join(",")
    ))
    .unwrap()
}

fn class_breaks_renderer(breaks: usize) -> Renderer {
    let infos: Vec<String> = (0..breaks)
        .map(|i| {
            format!(
                r#"{{"maxValue": {}, "label": "break {i}",
                     "symbol": {{"type": "marker", "style": "circle", "size": 6}}}}"#,
                (i + 1) * 10
            )
        })
        .collect();
    serde_json::from_str(&format!(
        r#"{{"type": "classBreaks", "field": "V", "minValue": 0, "classBreakInfos": [{}]}}"#,
        infos.join(",")
    ))
    .unwrap()
}

fn bench_unique_value(c: &mut Criterion) {
    let renderer = unique_value_renderer(100);
    let mut attributes = Attributes::new();
    attributes.insert("ZONE".to_string(), AttributeValue::from("zone-73"));

    c.bench_function("classify_unique_value_100", |b| {
        b.iter(|| classify(black_box(&attributes), black_box(&renderer)))
    });
}

fn bench_class_breaks(c: &mut Criterion) {
    let renderer = class_breaks_renderer(50);
    let mut attributes = Attributes::new();
    attributes.insert("V".to_string(), AttributeValue::from(333.0));

    c.bench_function("classify_class_breaks_50", |b| {
        b.iter(|| classify(black_box(&attributes), black_box(&renderer)))
    });
}

criterion_group!(benches, bench_unique_value, bench_class_breaks);
criterion_main!(benches);
