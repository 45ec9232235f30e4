#[macro_use] extern crate criterion;
extern crate fastlog;

use criterion::{Criterion, Fun, black_box};

use fastlog::{approx_log2, approx_log2_passes};

fn f32_log2(c: &mut Criterion) {
    let std = Fun::new("std", |b, &data: &&[f32]| {
        b.iter(|| {
            for &x in data {
                black_box(black_box(x).log2());
            }
        })
    });
    let approx = Fun::new("approx", |b, &data: &&[f32]| {
        b.iter(|| {
            for &x in data {
                black_box(approx_log2(black_box(x)));
            }
        })
    });
    let approx_1 = Fun::new("approx_1_pass", |b, &data: &&[f32]| {
        b.iter(|| {
            for &x in data {
                black_box(approx_log2_passes(black_box(x), 1));
            }
        })
    });

    const DATA: &[f32] = &[
        1.2345, 4.0, 0.0625, 9.87e12, 3.3e-20, 1.0000001, 1.9999999,
        713.0, 2.5, 1.0078125, 6.02e23, 1.01e-38, 0.3333333, 1.75,
    ];
    c.bench_functions("f32_log2", vec![std, approx, approx_1], DATA);
}

criterion_group!(benches, f32_log2);
criterion_main!(benches);
