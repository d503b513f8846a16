//! Benchmarks for manual rendering and page layout.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use devops_landing::content::{MANUAL_SECTIONS, render_manual};
use devops_landing::landing;
use devops_landing::markup::render;
use devops_landing::ui::manual_lines;

fn bench_render_sections(c: &mut Criterion) {
    c.bench_function("render_sections", |b| {
        b.iter(|| {
            for section in MANUAL_SECTIONS {
                black_box(render(black_box(section.content)));
            }
        });
    });
}

fn bench_manual_lines(c: &mut Criterion) {
    let manual = render_manual();
    c.bench_function("manual_lines", |b| {
        b.iter(|| manual_lines(black_box(&manual), black_box(88)));
    });
}

fn bench_landing_layout(c: &mut Criterion) {
    c.bench_function("landing_layout", |b| {
        b.iter(|| landing::layout(black_box(120)));
    });
}

criterion_group!(
    benches,
    bench_render_sections,
    bench_manual_lines,
    bench_landing_layout
);
criterion_main!(benches);
