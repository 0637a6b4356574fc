use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use glyph_canvas_gen::{GenerationParameters, PatternKind, render_to_surface};

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_512px");
    for pattern in [
        PatternKind::Linear,
        PatternKind::Texture,
        PatternKind::Geometric,
        PatternKind::Matrix,
        PatternKind::Ascii,
    ] {
        let params = GenerationParameters {
            pattern,
            seed: "bench-seed".to_string(),
            canvas_size: 512,
            complexity: 0.6,
            ..Default::default()
        };
        group.bench_function(format!("{pattern:?}"), |b| {
            b.iter(|| render_to_surface(black_box(&params), None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
