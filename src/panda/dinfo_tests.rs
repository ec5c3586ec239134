use super::*;
use byteorder::WriteBytesExt;
use std::io::Cursor;

fn write_padded(buf: &mut Vec<u8>, text: &str, width: usize) {
    let mut field = vec![0u8; width];
    field[..text.len()].copy_from_slice(text.as_bytes());
    buf.extend_from_slice(&field);
}

#[test]
fn dinfo_size_matches_field_layout() {
    // 3*16 (varname/unit/layername) + 64 (description) + 256 (note)
    // + 3*8 (datasize/time_start/time_end) + 3*4 (datatype/num_of_layer/step)
    assert_eq!(DINFO_SIZE, 404);
}

#[test]
fn reads_a_data_info_record() {
    let mut buf = Vec::new();
    write_padded(&mut buf, "sa_t2m", HSHORT);
    write_padded(&mut buf, "surface temperature", HMID);
    write_padded(&mut buf, "K", HSHORT);
    write_padded(&mut buf, "ZSSFC1", HSHORT);
    write_padded(&mut buf, "", HLONG);
    buf.write_i64::<BigEndian>(5 * 1 * 324 * 4).expect("datasize");
    buf.write_i32::<BigEndian>(0).expect("datatype"); // Real4
    buf.write_i32::<BigEndian>(1).expect("num_of_layer");
    buf.write_i32::<BigEndian>(1).expect("step");
    buf.write_i64::<BigEndian>(0).expect("time_start");
    buf.write_i64::<BigEndian>(3600).expect("time_end");

    let mut cursor = Cursor::new(buf);
    let info = DataInfo::read(&mut cursor).expect("dinfo");

    assert_eq!(info.varname, "sa_t2m");
    assert_eq!(info.unit, "K");
    assert_eq!(info.datatype, DataType::Real4);
    assert_eq!(info.datatype.element_size(), 4);
    assert_eq!(info.num_of_layer, 1);
    assert_eq!(info.step, 1);
    assert_eq!(info.datasize, 5 * 324 * 4);
}

#[test]
fn rejects_unknown_datatype() {
    assert!(DataType::try_from(7).is_err());
}
