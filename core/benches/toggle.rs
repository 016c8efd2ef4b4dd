use criterion::{Criterion, criterion_group, criterion_main};
use lights_out_core::{BoardConfig, LightGrid, initialize};
use std::hint::black_box;

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for size in [5, 16, 64] {
        let config = BoardConfig::new((size, size), 0.25);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| initialize(black_box(config), black_box(0x5eed)))
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    for size in [5, 16, 64] {
        let grid = initialize(BoardConfig::new((size, size), 0.5), 1);
        let center = (size / 2, size / 2);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| black_box(&grid).toggle(black_box(center)))
        });
    }
    group.finish();
}

fn bench_has_won(c: &mut Criterion) {
    let solved = LightGrid::unlit((64, 64));
    c.bench_function("has_won/64x64 solved", |b| {
        b.iter(|| black_box(&solved).has_won())
    });
}

criterion_group!(benches, bench_initialize, bench_toggle, bench_has_won);
criterion_main!(benches);
