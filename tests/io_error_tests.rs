use axisconv::{errors::ValidationError, io::IoError, vector};

fn parse_for_export(text: &str) -> Result<(), IoError> {
    vector::parse(text)?;
    Ok(())
}

#[test]
fn validation_errors_convert_into_io_errors() {
    let err = parse_for_export("1.0, 2.0").unwrap_err();
    match &err {
        IoError::Validation(ValidationError::WrongComponentCount { expected, found }) => {
            assert_eq!((*expected, *found), (3, 2));
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Validation failed: (WrongComponentCount) Expected 3 components, found 2"
    );
}

#[test]
fn std_io_errors_convert_into_io_errors() {
    let err: IoError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(err, IoError::StdIo(_)));
    assert!(err.to_string().starts_with("std::io::Error:"));
}

#[test]
fn valid_input_passes_through() {
    assert!(parse_for_export("1 2 3").is_ok());
}
