use super::*;

#[test]
fn codes_render_in_screaming_case() {
    assert_eq!(ExportErrorCode::StorageFull.to_string(), "STORAGE_FULL");
    assert_eq!(ExportErrorCode::InvalidTimeRange.as_str(), "INVALID_TIME_RANGE");
    assert_eq!(
        serde_json::to_string(&ExportErrorCode::GenerationFailed).unwrap(),
        "\"GENERATION_FAILED\""
    );
}

#[test]
fn network_and_fetch_messages_classify_as_network() {
    for message in [
        "Network unreachable",
        "failed to FETCH geo data",
        "Data source error for traffic: network timeout",
    ] {
        assert_eq!(
            ExportError::classify(message).code,
            ExportErrorCode::NetworkError,
            "{message}"
        );
    }
}

#[test]
fn other_messages_classify_as_generation_failed() {
    let err = ExportError::classify("disk quota exceeded while writing");

    assert_eq!(err.code, ExportErrorCode::GenerationFailed);
    assert_eq!(err.details.as_deref(), Some("disk quota exceeded while writing"));
}

#[test]
fn classified_details_are_redacted() {
    let err = ExportError::classify("fetch failed: Authorization: Bearer sk_live_123 token=abc&x=1");
    let details = err.details.unwrap();

    assert!(!details.contains("sk_live_123"));
    assert!(!details.contains("abc"));
    assert!(details.contains("Bearer [REDACTED]"));
    assert!(details.contains("token=[REDACTED]&x=1"));
}

#[test]
fn redact_leaves_clean_text_alone() {
    assert_eq!(redact("nothing secret here"), "nothing secret here");
}

#[test]
fn display_includes_code_message_and_details() {
    let err = ExportError::new(ExportErrorCode::InvalidData, "No data").with_details("geo");
    assert_eq!(err.to_string(), "[INVALID_DATA] No data: geo");
}

#[test]
fn outcome_accessors() {
    let ok = ExportOutcome::Success {
        file_name: "a.html".to_string(),
        path: PathBuf::from("/tmp/a.html"),
    };
    assert!(ok.is_success());
    assert_eq!(ok.success().unwrap().0, "a.html");
    assert!(ok.error().is_none());

    let failed = ExportOutcome::Failure(ExportError::new(ExportErrorCode::StorageFull, "full"));
    assert!(!failed.is_success());
    assert!(failed.success().is_none());
    assert_eq!(failed.error().unwrap().code, ExportErrorCode::StorageFull);
}
