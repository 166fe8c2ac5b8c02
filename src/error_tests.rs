use super::*;

#[test]
fn config_error_display() {
    let err = ReportError::Config("palette must not be empty".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: palette must not be empty"
    );
}

#[test]
fn data_source_error_names_category() {
    let err = ReportError::data_source(ExportCategory::Geo, "network request failed");
    assert_eq!(
        err.to_string(),
        "Data source error for geo: network request failed"
    );
}

#[test]
fn file_access_error_keeps_source() {
    use std::error::Error as _;

    let err = ReportError::FileAccess {
        path: PathBuf::from("/tmp/data.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };

    assert!(err.to_string().contains("/tmp/data.json"));
    assert!(err.source().is_some());
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::other("disk on fire");
    let err: ReportError = io.into();
    assert!(matches!(err, ReportError::Io(_)));
}
