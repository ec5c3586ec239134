use super::*;

// All error variants must have a non-empty display.
#[test]
fn display() {
    let errors: Vec<Error> = vec![
        InvalidParameter::new("glevel".into(), "glevel < rlevel").into(),
        io::Error::new(io::ErrorKind::NotFound, "missing").into(),
        FormatViolation::new("header".into(), "bad endian tag").into(),
        NotFound::new("sa_tppn@3".into(), "no matching record").into(),
        ShapeMismatch::new("datasize".into(), "datasize != gall*kall*rgn*elem")
            .into(),
        UnsupportedConfiguration::new("LEGACYS".into(), "not implemented")
            .into(),
    ];

    for error in errors {
        assert!(!error.to_string().is_empty());
    }
}

#[test]
fn warning_display() {
    let warning = Warning("glevel mismatch".to_owned());
    assert_eq!(warning.to_string(), "glevel mismatch");
}
