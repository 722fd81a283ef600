// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use graphplane_eval::FunctionList;
use graphplane_imaging_ref::RefBackend;
use graphplane_imaging_svg::SvgBackend;
use graphplane_render::{Theme, render_frame};
use graphplane_view::Viewport;
use kurbo::Size;

fn function_list(count: usize) -> FunctionList {
    let mut list = FunctionList::new();
    for i in 0..count {
        list.add(&format!("sin(x + {i}) * {}", i + 1));
    }
    list
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let extent = Size::new(1280.0, 720.0);

    for count in [0usize, 1, 8] {
        let functions = function_list(count).compiled();

        group.bench_with_input(BenchmarkId::new("ref", count), &functions, |b, functions| {
            b.iter_batched(
                RefBackend::default,
                |mut backend| {
                    render_frame(
                        &mut backend,
                        functions,
                        Viewport::default(),
                        extent,
                        &Theme::LIGHT,
                    );
                    black_box(backend);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("svg", count), &functions, |b, functions| {
            b.iter_batched(
                SvgBackend::new,
                |mut backend| {
                    render_frame(
                        &mut backend,
                        functions,
                        Viewport::default(),
                        extent,
                        &Theme::LIGHT,
                    );
                    black_box(backend.to_svg(1280, 720));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_zoomed_out(c: &mut Criterion) {
    // Scale 1 keeps the grid coarse but every column far from the origin.
    let functions = function_list(4).compiled();
    let viewport = Viewport::new(1e4, -1e4, 1.0);
    c.bench_function("render_frame/zoomed_out", |b| {
        b.iter_batched(
            RefBackend::default,
            |mut backend| {
                render_frame(
                    &mut backend,
                    &functions,
                    viewport,
                    Size::new(1280.0, 720.0),
                    &Theme::DARK,
                );
                black_box(backend);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_render_frame, bench_zoomed_out);
criterion_main!(benches);
