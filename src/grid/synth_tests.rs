use super::*;
use crate::coord::LatLon;
use float_eq::assert_float_eq;

#[test]
fn great_circle_centroid_of_symmetric_octant_is_equidistant() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);
    let c = Vec3::new(0.0, 0.0, 1.0);

    let centroid = great_circle_centroid(&[a, b, c, a]);
    let expected = (a + b + c).normalized();

    assert_float_eq!(centroid.x, expected.x, abs <= 1e-12);
    assert_float_eq!(centroid.y, expected.y, abs <= 1e-12);
    assert_float_eq!(centroid.z, expected.z, abs <= 1e-12);
    assert_float_eq!(centroid.norm(), 1.0, abs <= 1e-12);
}

#[test]
fn great_circle_centroid_ignores_repeated_points() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(0.0, 1.0, 0.0);

    let centroid = great_circle_centroid(&[a, a, b, a]);
    let expected = great_circle_centroid(&[a, b, a, a]);

    assert!((centroid.norm() - 1.0).abs() < 1e-12);
    assert!((expected.norm() - 1.0).abs() < 1e-12);
}

fn small_patch(dims: GridDims) -> Vec<Vec3> {
    let gall_1d = dims.gall_1d();
    let step = 0.02;
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

#[test]
fn synthesized_vertices_are_unit_length() {
    let dims = GridDims::new(2, 1).expect("valid dims");
    let centers = small_patch(dims);

    let vertices = synthesize(&centers, dims);

    assert_eq!(vertices.len(), dims.gall() as usize);
    for pair in &vertices {
        for v in pair {
            assert_float_eq!(v.norm(), 1.0, abs <= 1e-9);
        }
    }
}

#[test]
fn interior_vertex_matches_manual_centroid() {
    let dims = GridDims::new(2, 1).expect("valid dims");
    let centers = small_patch(dims);

    let vertices = synthesize(&centers, dims);

    let i = 1;
    let j = 1;
    let c00 = centers[dims.linear_index(i, j)];
    let c10 = centers[dims.linear_index(i + 1, j)];
    let c11 = centers[dims.linear_index(i + 1, j + 1)];
    let c01 = centers[dims.linear_index(i, j + 1)];

    let expected_ti = great_circle_centroid(&[c00, c10, c11, c00]);
    let expected_tj = great_circle_centroid(&[c00, c11, c01, c00]);

    let got = vertices[dims.linear_index(i, j)];
    assert_float_eq!(got[TI].x, expected_ti.x, abs <= 1e-12);
    assert_float_eq!(got[TJ].x, expected_tj.x, abs <= 1e-12);
}
