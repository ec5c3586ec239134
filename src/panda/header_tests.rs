use super::*;
use byteorder::WriteBytesExt;
use std::io::{Cursor, Write};

fn write_padded(buf: &mut Vec<u8>, text: &str, width: usize) {
    let mut field = vec![0u8; width];
    field[..text.len()].copy_from_slice(text.as_bytes());
    buf.extend_from_slice(&field);
}

fn synthetic_header(rgnid: &[i32], num_of_data: i32) -> Vec<u8> {
    let mut buf = Vec::new();
    write_padded(&mut buf, "sample run", HMID);
    write_padded(&mut buf, "generated for a test", HLONG);
    buf.write_i32::<BigEndian>(1).expect("fmode"); // Integrated
    buf.write_i32::<BigEndian>(2).expect("endian"); // Big
    buf.write_i32::<BigEndian>(0).expect("topology"); // Icosahedron
    buf.write_i32::<BigEndian>(5).expect("glevel");
    buf.write_i32::<BigEndian>(1).expect("rlevel");
    #[allow(clippy::cast_possible_truncation, reason = "test size is tiny")]
    buf.write_i32::<BigEndian>(rgnid.len() as i32)
        .expect("num_of_rgn");
    for &id in rgnid {
        buf.write_i32::<BigEndian>(id).expect("rgnid");
    }
    buf.write_i32::<BigEndian>(num_of_data).expect("num_of_data");
    buf
}

#[test]
fn reads_a_well_formed_header() {
    let bytes = synthetic_header(&[0, 1, 2, 3, 4], 3);
    let mut cursor = Cursor::new(bytes);

    let header = PackageHeader::read(&mut cursor).expect("header");
    assert_eq!(header.description, "sample run");
    assert_eq!(header.note, "generated for a test");
    assert_eq!(header.fmode, FileMode::Integrated);
    assert_eq!(header.endiantype, Endian::Big);
    assert_eq!(header.grid_topology, GridTopology::Icosahedron);
    assert_eq!(header.glevel, 5);
    assert_eq!(header.rlevel, 1);
    assert_eq!(header.rgnid, vec![0, 1, 2, 3, 4]);
    assert_eq!(header.num_of_data, 3);
    assert_eq!(header.num_of_rgn(), 5);

    let dims = header.dims().expect("dims");
    assert_eq!(dims.gall_in(), 256);
}

#[test]
fn rejects_unknown_grid_topology() {
    let mut buf = Vec::new();
    write_padded(&mut buf, "", HMID);
    write_padded(&mut buf, "", HLONG);
    buf.write_i32::<BigEndian>(0).expect("fmode");
    buf.write_i32::<BigEndian>(2).expect("endian");
    buf.write_i32::<BigEndian>(9).expect("bad topology");
    buf.write_i32::<BigEndian>(0).expect("glevel");
    buf.write_i32::<BigEndian>(0).expect("rlevel");
    buf.write_i32::<BigEndian>(0).expect("num_of_rgn");
    buf.write_i32::<BigEndian>(0).expect("num_of_data");

    let mut cursor = Cursor::new(buf);
    assert!(matches!(
        PackageHeader::read(&mut cursor),
        Err(Error::FormatViolation(_))
    ));
}
