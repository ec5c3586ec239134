use super::*;

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
fn synthesize_rejects_wrong_center_count() {
    let dims = GridDims::new(3, 1).expect("valid dims");

    let err = Region::synthesize(dims, vec![Vec3::new(1.0, 0.0, 0.0)]).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch(_)));
}

#[test]
fn new_rejects_mismatched_vertex_count() {
    let dims = GridDims::new(3, 1).expect("valid dims");
    let centers = small_patch(dims);

    let err = Region::new(dims, centers, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch(_)));
}

#[test]
fn interior_latlon_has_gall_in_entries() {
    let dims = GridDims::new(3, 1).expect("valid dims");
    let centers = small_patch(dims);

    let region = Region::synthesize(dims, centers).expect("valid region");

    assert_eq!(region.interior_latlon().len(), dims.gall_in() as usize);
    assert_eq!(region.polygons().len(), dims.gall_in() as usize);
}

#[test]
fn cell_areas_are_positive_and_small_on_a_flat_patch() {
    let dims = GridDims::new(3, 1).expect("valid dims");
    let centers = small_patch(dims);

    let region = Region::synthesize(dims, centers).expect("valid region");
    let areas = region.cell_areas(crate::EARTH_RADIUS_M);

    assert_eq!(areas.len(), dims.gall_in() as usize);
    for area in areas {
        assert!(area > 0.0, "cell area should be strictly positive, got {area}");
    }
}
