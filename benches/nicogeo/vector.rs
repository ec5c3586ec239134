use criterion::{black_box, Criterion};
use nicogeo::vector::{angle, triangle_area, Vec3};
use nicogeo::EARTH_RADIUS_M;

pub fn bench(c: &mut Criterion) {
    let a = Vec3::new(EARTH_RADIUS_M, 0.0, 0.0);
    let b = Vec3::new(0.0, EARTH_RADIUS_M, 0.0);
    let ctr = Vec3::new(0.0, 0.0, EARTH_RADIUS_M);

    c.bench_function("vector/angle", |bencher| {
        bencher.iter(|| angle(black_box(a), black_box(b)));
    });

    c.bench_function("vector/triangle_area", |bencher| {
        bencher.iter(|| triangle_area(black_box(a), black_box(b), black_box(ctr), EARTH_RADIUS_M));
    });
}
