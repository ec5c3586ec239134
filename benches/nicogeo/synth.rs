use criterion::{black_box, Criterion};
use nicogeo::coord::LatLon;
use nicogeo::vector::Vec3;
use nicogeo::{GridDims, Region};

fn patch(dims: GridDims) -> Vec<Vec3> {
    let gall_1d = dims.gall_1d();
    let step = 0.01;
    let mut centers = vec![Vec3::new(0.0, 0.0, 0.0); dims.gall() as usize];

    for j in 0..gall_1d {
        for i in 0..gall_1d {
            let lat = f64::from(j) * step;
            let lon = f64::from(i) * step;
            centers[dims.linear_index(i, j)] = LatLon::from_radians(lat, lon).to_xyz();
        }
    }

    centers
}

pub fn bench(c: &mut Criterion) {
    let dims = GridDims::new(6, 1).expect("valid dims");
    let centers = patch(dims);

    c.bench_function("grid/synthesize_and_polygons", |bencher| {
        bencher.iter(|| {
            let region = Region::synthesize(dims, black_box(centers.clone())).expect("region");
            black_box(region.polygons())
        });
    });
}
