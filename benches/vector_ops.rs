use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tinygeo::prelude::*;

fn bench_geometry(c: &mut Criterion) {
    let a: Vector3<f32> = Vector::new([1.0, 2.0, 3.0]);
    let b: Vector3<f32> = Vector::new([-4.0, 0.5, 2.0]);

    c.bench_function("vector3_dot", |bencher| {
        bencher.iter(|| black_box(&a).dot(black_box(&b)))
    });

    c.bench_function("vector3_cross", |bencher| {
        bencher.iter(|| black_box(&a).cross(black_box(&b)))
    });

    c.bench_function("vector3_normalized", |bencher| {
        bencher.iter(|| black_box(&a).normalized())
    });
}

fn bench_scalar_division(c: &mut Criterion) {
    let v: Vector<f64, 16> = Vector::splat(3.0);

    c.bench_function("vector16_div_scalar", |bencher| {
        bencher.iter(|| black_box(v) / black_box(7.0))
    });
}

criterion_group!(benches, bench_geometry, bench_scalar_division);
criterion_main!(benches);
