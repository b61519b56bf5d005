//! Benchmarks for the per-keystroke work: status metrics, buffer sync and
//! gutter layout.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use slate_core::gutter::{self, UniformLines};
use slate_core::metrics::{StatusLine, count_chars, count_words};
use slate_core::Document;

/// Generates a large text string for benchmarking.
fn generate_large_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("Line {}: This is a sample line of text for benchmarking purposes.\n", i))
        .collect()
}

/// Benchmarks word and character counting.
fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    for size in [100, 1000, 10000, 100000].iter() {
        let text = generate_large_text(*size);

        group.bench_with_input(BenchmarkId::new("words", size), &text, |b, text| {
            b.iter(|| black_box(count_words(black_box(text))))
        });

        group.bench_with_input(BenchmarkId::new("chars", size), &text, |b, text| {
            b.iter(|| black_box(count_chars(black_box(text))))
        });

        group.bench_with_input(BenchmarkId::new("status_line", size), &text, |b, text| {
            b.iter(|| black_box(StatusLine::compute(black_box(text), (size / 2, 10))))
        });
    }

    group.finish();
}

/// Benchmarks pushing the widget's text into the document.
fn bench_document_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sync");

    let text = generate_large_text(10000);

    group.bench_function("apply_edit", |b| {
        b.iter_with_setup(
            || Document::with_text(&text),
            |mut document| {
                document.apply_edit(black_box(&text));
                black_box(document)
            },
        )
    });

    group.bench_function("text", |b| {
        let document = Document::with_text(&text);
        b.iter(|| black_box(document.text()))
    });

    group.finish();
}

/// Benchmarks gutter layout deep into a long buffer.
fn bench_gutter_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("gutter_layout");

    let lines = UniformLines {
        line_count: 1_000_000,
        line_height: 18.2,
        top_padding: 4.0,
        scroll_offset: 18.2 * 500_000.0,
        viewport_height: Some(1080.0),
    };

    group.bench_function("visible_labels", |b| {
        b.iter(|| black_box(gutter::layout(black_box(&lines))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_counting,
    bench_document_sync,
    bench_gutter_layout,
);
criterion_main!(benches);
