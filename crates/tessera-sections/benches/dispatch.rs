//! Benchmarks for section dispatch.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use tessera_sections::{Dispatcher, RenderMode, Section, default_registry, validate_sections};

/// A landing page repeated `copies` times.
fn landing_page(copies: usize) -> Vec<Section> {
    let features: Vec<Value> = (0..6)
        .map(|i| json!({"title": format!("Feature {i}"), "description": "Does things"}))
        .collect();
    let page = json!([
        {"type": "hero", "props": {
            "title": "Ship your site today",
            "subtitle": "Configuration in, pages out",
            "buttons": [{"text": "Start", "href": "/signup"}],
            "image": "/hero.png",
            "layout": "split"
        }},
        {"type": "features", "props": {
            "title": "Features",
            "items": features
        }},
        {"type": "stats", "props": {"items": [{"label": "Users", "value": "10k"}, {"label": "Uptime", "value": "99.9%"}]}},
        {"type": "pricing", "props": {"plans": [
            {"name": "Free", "price": 0, "features": ["One site"]},
            {"name": "Pro", "price": {"monthly": 29}, "featured": true, "features": [{"text": "Unlimited"}]}
        ]}},
        {"type": "faq", "props": {"items": [{"question": "Why?", "answer": "Because."}]}},
        {"type": "bogus", "props": {"title": "skipped"}},
        {"type": "contact", "props": {"email": "hi@example.com", "form": true}}
    ]);
    let sections: Vec<Section> = serde_json::from_value(page).unwrap_or_default();
    sections.iter().cycle().take(sections.len() * copies).cloned().collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for copies in [1, 10, 50] {
        let sections = landing_page(copies);
        group.throughput(Throughput::Elements(sections.len() as u64));
        for mode in [RenderMode::Production, RenderMode::Development] {
            let dispatcher = Dispatcher::new(default_registry(), mode);
            group.bench_with_input(
                BenchmarkId::new(mode.as_str(), sections.len()),
                &sections,
                |b, sections| b.iter(|| dispatcher.render(sections)),
            );
        }
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let sections = landing_page(10);
    c.bench_function("validate_70_sections", |b| {
        b.iter(|| validate_sections(default_registry(), &sections));
    });
}

criterion_group!(benches, bench_dispatch, bench_validate);
criterion_main!(benches);
