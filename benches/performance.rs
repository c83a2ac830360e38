// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for the practice generator
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Generator draw throughput
//! - Scale and melody construction
//! - Whole-session generation and rendering
//! - Progress serialization

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use practice_generator::generators::{ScaleSheet, SimpleButBeautiful};
use practice_generator::progress::{parse_progress, serialize_progress};
use practice_generator::render::LilypondRenderer;
use practice_generator::{Lcg, PracticeGenerator, ScaleKind, SheetGenerator, TextRenderer};

/// Benchmark raw generator draws
fn bench_lcg(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcg");

    group.bench_function("next_int", |b| {
        let mut rng = Lcg::from_state(745);
        b.iter(|| black_box(rng.next_int()))
    });

    group.bench_function("next_range", |b| {
        let mut rng = Lcg::from_state(745);
        b.iter(|| black_box(rng.next_range(0, black_box(12))))
    });

    group.bench_function("from_text", |b| {
        b.iter(|| Lcg::from_text(black_box("2026-10-19 horn practice")))
    });

    group.finish();
}

/// Benchmark sheet construction for every key
fn bench_sheets(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheets");

    for kind in ScaleKind::ALL {
        let generator = ScaleSheet::new(kind);
        group.bench_with_input(BenchmarkId::new("scale", kind), &generator, |b, generator| {
            b.iter(|| {
                for key in 0..12 {
                    black_box(generator.generate(black_box(key)).ok());
                }
            })
        });
    }

    group.bench_function("simple_but_beautiful", |b| {
        let generator = SimpleButBeautiful::new();
        b.iter(|| {
            for key in 0..12 {
                black_box(generator.generate(black_box(key)).ok());
            }
        })
    });

    group.finish();
}

/// Benchmark session generation, including re-rolls
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("generate", |b| {
        b.iter(|| PracticeGenerator::for_day(black_box(745)).generate().ok())
    });

    for rolls in [1usize, 5, 20].iter() {
        group.bench_with_input(BenchmarkId::new("reroll", rolls), rolls, |b, &rolls| {
            b.iter(|| {
                let mut generator = PracticeGenerator::for_day(black_box(745));
                for _ in 0..rolls {
                    black_box(generator.generate().ok());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark rendering a generated session
fn bench_render(c: &mut Criterion) {
    let session = match PracticeGenerator::for_day(745).generate() {
        Ok(session) => session,
        Err(e) => panic!("session generation failed: {}", e),
    };
    let mut group = c.benchmark_group("render");

    group.bench_function("text", |b| {
        b.iter(|| {
            let mut renderer = TextRenderer::new(Vec::with_capacity(1024));
            session.render_sheets(&mut renderer).ok();
            black_box(renderer.into_inner().len())
        })
    });

    group.bench_function("lilypond", |b| {
        b.iter(|| {
            let mut renderer = LilypondRenderer::new(Vec::with_capacity(1024));
            session.render_sheets(&mut renderer).ok();
            black_box(renderer.into_inner().len())
        })
    });

    group.finish();
}

/// Benchmark the completion map format with a year of history
fn bench_progress(c: &mut Criterion) {
    let mut days = BTreeMap::new();
    for day in 380..745i64 {
        days.insert(day, (day as u64 * 7) & 0b111);
    }
    let serialized = serialize_progress(&days);

    let mut group = c.benchmark_group("progress");
    group.bench_function("serialize", |b| b.iter(|| serialize_progress(black_box(&days))));
    group.bench_function("parse", |b| b.iter(|| parse_progress(black_box(&serialized))));
    group.finish();
}

criterion_group!(
    benches,
    bench_lcg,
    bench_sheets,
    bench_session,
    bench_render,
    bench_progress,
);

criterion_main!(benches);
