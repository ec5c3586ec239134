use criterion::{black_box, Criterion};
use nicogeo::coord::LatLon;
use nicogeo::vector::Vec3;

pub fn bench(c: &mut Criterion) {
    let ll = LatLon::from_degrees(35.6, 139.7);
    let v = Vec3::new(0.3, 0.4, 0.866_025_4);

    c.bench_function("coord/to_xyz", |bencher| {
        bencher.iter(|| black_box(ll).to_xyz());
    });

    c.bench_function("coord/from_xyz", |bencher| {
        bencher.iter(|| LatLon::from_xyz(black_box(v)));
    });
}
