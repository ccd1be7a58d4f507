//! Benchmarks for table_text metrics and layout.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use table_text::cell::fit_cell;
use table_text::prelude::*;

const PLAIN: &str = "This is a longer string that needs to be wrapped to fit within a certain width. It contains multiple words and should demonstrate the wrapping algorithm.";

fn styled_sample() -> String {
    PLAIN
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i % 3 == 0 {
                format!("\x1b[3{}m{word}\x1b[39m", i % 7 + 1)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_width(c: &mut Criterion) {
    let styled = styled_sample();
    let cjk = "漢字テスト日本語の文字中文字符한글".repeat(8);

    c.bench_function("width_plain", |b| {
        b.iter(|| black_box(visible_width(black_box(PLAIN))));
    });

    c.bench_function("width_styled", |b| {
        b.iter(|| black_box(visible_width(black_box(&styled))));
    });

    c.bench_function("width_cjk", |b| {
        b.iter(|| black_box(visible_width(black_box(&cjk))));
    });
}

fn benchmark_truncate(c: &mut Criterion) {
    let styled = styled_sample();

    c.bench_function("truncate_plain_40", |b| {
        b.iter(|| black_box(truncate(PLAIN, 40, "…")));
    });

    c.bench_function("truncate_styled_40", |b| {
        b.iter(|| black_box(truncate(&styled, 40, "…")));
    });
}

fn benchmark_wrap(c: &mut Criterion) {
    let styled = styled_sample();

    c.bench_function("word_wrap_40", |b| {
        b.iter(|| black_box(word_wrap(40, PLAIN)));
    });

    c.bench_function("word_wrap_styled_20", |b| {
        b.iter(|| black_box(word_wrap(20, &styled)));
    });

    c.bench_function("wrap_hard_20", |b| {
        b.iter(|| black_box(wrap_hard(20, &styled)));
    });
}

fn benchmark_colorize(c: &mut Criterion) {
    let lines = word_wrap(20, &styled_sample());

    c.bench_function("colorize_lines", |b| {
        b.iter(|| black_box(colorize_lines(&lines)));
    });
}

fn benchmark_cell(c: &mut Criterion) {
    let styled = styled_sample();
    let wrapping = TableOptions {
        word_wrap: true,
        ..TableOptions::default()
    };

    c.bench_function("fit_cell_wrapped", |b| {
        b.iter(|| black_box(fit_cell(&styled, 24, &wrapping, Alignment::Center)));
    });

    c.bench_function("merge_options", |b| {
        let overrides = serde_json::json!({"style": {"head": [], "padding-left": 2}});
        b.iter(|| black_box(TableOptions::from_overrides(&overrides)));
    });
}

criterion_group!(
    benches,
    benchmark_width,
    benchmark_truncate,
    benchmark_wrap,
    benchmark_colorize,
    benchmark_cell
);
criterion_main!(benches);
