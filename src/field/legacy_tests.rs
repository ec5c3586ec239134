use super::*;
use byteorder::{BigEndian, WriteBytesExt};
use crate::dims::GridDims;
use crate::value::GridArray;
use std::io::Write;

fn tile_values(gall: usize, base: f32) -> Vec<f32> {
    (0..gall).map(|i| base + i as f32).collect()
}

fn write_direct_file(dims: GridDims, kall: u32) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let gall = dims.gall() as usize;
    for step in 0..2u32 {
        for level in 0..kall {
            let base = (step * 1000 + level * 100) as f32;
            for v in tile_values(gall, base) {
                file.write_f32::<BigEndian>(v).expect("value");
            }
        }
    }
    file.flush().expect("flush");
    file
}

#[test]
fn reads_direct_access_interior_ravelled() {
    let dims = GridDims::new(1, 0).expect("dims"); // gall_1d=4, gall=16, nmax=2
    let kall = 2;
    let file = write_direct_file(dims, kall);

    let reader = LegacyFieldReader::new(dims, kall, file.path(), ReadOptions::default());
    let values = reader.read(1, 1).expect("read");

    let GridArray::Real4(array) = values else {
        panic!("expected Real4");
    };
    assert_eq!(array.shape(), [1, 4]);

    // step=1, level=1 tile base = 1*1000 + 1*100 = 1100, interior cells are
    // indices (1,1), (2,1), (1,2), (2,2) of the 4x4 tile -> values 1105,
    // 1106, 1109, 1110.
    assert_eq!(
        array.iter().copied().collect::<Vec<_>>(),
        vec![1105.0, 1106.0, 1109.0, 1110.0]
    );
}

#[test]
fn reads_with_halo_as_2d_tile() {
    let dims = GridDims::new(1, 0).expect("dims");
    let kall = 1;
    let file = write_direct_file(dims, kall);

    let options = ReadOptions {
        access: Access::Direct,
        output_shape: OutputShape::TwoD,
        output_halo: true,
    };
    let reader = LegacyFieldReader::new(dims, kall, file.path(), options);
    let values = reader.read(0, 0).expect("read");

    let GridArray::Real4(array) = values else {
        panic!("expected Real4");
    };
    assert_eq!(array.shape(), [4, 4]);
    assert_eq!(array[[0, 0]], 0.0);
    assert_eq!(array[[3, 3]], 15.0);
}

#[test]
fn sequential_access_skips_record_prefix() {
    let dims = GridDims::new(0, 0).expect("dims"); // gall = 9
    let gall = dims.gall() as usize;
    let kall = 1;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for step in 0..2u32 {
        #[allow(clippy::cast_possible_truncation, reason = "test size is tiny")]
        let prefix = (gall * 4) as i32;
        file.write_i32::<BigEndian>(prefix).expect("prefix");
        let base = (step * 100) as f32;
        for v in tile_values(gall, base) {
            file.write_f32::<BigEndian>(v).expect("value");
        }
    }
    file.flush().expect("flush");

    let options = ReadOptions {
        access: Access::Sequential,
        output_shape: OutputShape::OneD,
        output_halo: true,
    };
    let reader = LegacyFieldReader::new(dims, kall, file.path(), options);
    let values = reader.read(1, 0).expect("read");

    let GridArray::Real4(array) = values else {
        panic!("expected Real4");
    };
    assert_eq!(array.shape(), [1, 9]);
    assert_eq!(array[[0, 0]], 100.0);
}
