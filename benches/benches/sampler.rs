// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use graphplane_eval::{EvalError, compile};
use graphplane_render::sample_function;
use graphplane_view::Viewport;
use kurbo::Size;

const EXPRESSIONS: [&str; 4] = ["x", "x^3 - 2*x", "sin(x) * cos(3*x)", "1/x"];

fn bench_compiled_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/compiled");

    let extent = Size::new(1920.0, 1080.0);
    group.throughput(Throughput::Elements(1920));
    for text in EXPRESSIONS {
        let Ok(evaluator) = compile(text) else {
            panic!("benchmark expression {text:?} must compile");
        };
        group.bench_with_input(BenchmarkId::from_parameter(text), &evaluator, |b, f| {
            b.iter(|| black_box(sample_function(f, Viewport::default(), black_box(extent))));
        });
    }

    group.finish();
}

fn bench_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/width");

    // Baseline without the expression engine: a plain closure.
    let cubic = |x: f64| -> Result<f64, EvalError> { Ok(x * x * x - 2.0 * x) };
    for width in [320u32, 1280, 3840] {
        let extent = Size::new(f64::from(width), 720.0);
        group.throughput(Throughput::Elements(u64::from(width)));
        group.bench_with_input(BenchmarkId::new("closure", width), &extent, |b, extent| {
            b.iter(|| black_box(sample_function(&cubic, Viewport::default(), *extent)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compiled_expressions, bench_widths);
criterion_main!(benches);
