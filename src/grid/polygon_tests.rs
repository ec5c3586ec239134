use super::*;
use crate::grid::synth::synthesize;

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
fn assembles_one_polygon_per_interior_cell() {
    let dims = GridDims::new(3, 1).expect("valid dims");
    let centers = small_patch(dims);
    let vertices = synthesize(&centers, dims);

    let polygons = assemble(&vertices, dims);

    assert_eq!(polygons.len(), dims.gall_in() as usize);
    for polygon in &polygons {
        assert!((5..=6).contains(&polygon.len()));
        assert!(!polygon.is_empty());
    }
}

#[test]
fn hexagon_vertices_are_all_distinct() {
    let dims = GridDims::new(3, 1).expect("valid dims");
    let centers = small_patch(dims);
    let vertices = synthesize(&centers, dims);

    let polygons = assemble(&vertices, dims);
    let hexagon = polygons
        .iter()
        .find(|p| p.len() == 6)
        .expect("a hexagon exists in a uniform patch");

    for a in 0..hexagon.len() {
        for b in (a + 1)..hexagon.len() {
            assert_ne!(hexagon[a], hexagon[b], "vertices {a} and {b} coincide");
        }
    }
}

#[test]
fn consecutive_duplicate_raw_vertices_collapse_to_pentagon() {
    let v = Vec3::new(1.0, 0.0, 0.0).normalized();
    let a = LatLon::from_xyz(v).to_xyz();
    let b = LatLon::from_xyz(Vec3::new(0.0, 1.0, 0.0)).to_xyz();
    let c = LatLon::from_xyz(Vec3::new(0.0, 0.0, 1.0)).to_xyz();
    let d = LatLon::from_xyz(Vec3::new(-1.0, 0.0, 0.0)).to_xyz();

    // Repeats `a` back-to-back, as a pentagon's collapsed corner would.
    let polygon = CellPolygon::from_raw([a, a, b, c, d, d]);

    assert_eq!(polygon.len(), 4);
}
