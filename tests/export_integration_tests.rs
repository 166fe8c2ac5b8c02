//! Integration tests for the `export` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const START: &str = "2024-03-01T00:00:00Z";
const END: &str = "2024-03-02T00:00:00Z";

fn export_args<'a>(data: &'a str, out: &'a str, category: &'a str) -> Vec<&'a str> {
    vec![
        "export",
        "--zone-id",
        "zone-123",
        "--zone-name",
        "shop.example.com",
        "--start",
        START,
        "--end",
        END,
        "--data",
        data,
        "--output-dir",
        out,
        "--category",
        category,
        "--quiet",
    ]
}

// =============================================================================
// Successful exports
// =============================================================================

#[test]
fn full_export_writes_html_report() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    let out = fixture.path().join("reports");

    zone_report!()
        .args(export_args(
            data.to_str().unwrap(),
            out.to_str().unwrap(),
            "full",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("zone-report-shop_example_com-"))
        .stdout(predicate::str::contains(".html"));

    let files = fixture.files_in("reports");
    assert_eq!(files.len(), 1);

    let html = std::fs::read_to_string(&files[0]).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Traffic Overview"));
    assert!(html.contains("Threat Types"));
    assert!(html.contains("Requests by Country"));
    assert!(html.contains("<svg"));
    assert!(html.contains("1.5M"));
    assert!(html.contains("5.00 GB"));
}

#[test]
fn single_category_export_contains_only_that_category() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    let out = fixture.path().join("reports");

    zone_report!()
        .args(export_args(
            data.to_str().unwrap(),
            out.to_str().unwrap(),
            "geo",
        ))
        .assert()
        .success();

    let html = std::fs::read_to_string(&fixture.files_in("reports")[0]).unwrap();
    assert!(html.contains("Requests by Country"));
    assert!(!html.contains("Traffic Overview"));
}

#[test]
fn config_prefix_applies_to_file_name() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    let config = fixture.create_file("custom.toml", "[export]\nproduct_prefix = \"acme\"\n");
    let out = fixture.path().join("reports");

    let mut args = export_args(data.to_str().unwrap(), out.to_str().unwrap(), "traffic");
    args.extend(["--config", config.to_str().unwrap()]);

    zone_report!()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-shop_example_com-"));
}

// =============================================================================
// Export failures
// =============================================================================

#[test]
fn reversed_range_fails_with_invalid_time_range() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();

    zone_report!()
        .args([
            "export",
            "--zone-id",
            "z",
            "--zone-name",
            "z",
            "--start",
            END,
            "--end",
            START,
            "--data",
            data.to_str().unwrap(),
            "--output-dir",
            fixture.path().to_str().unwrap(),
            "-q",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("INVALID_TIME_RANGE"));
}

#[test]
fn absent_category_fails_with_invalid_data() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    let out = fixture.path().join("reports");

    zone_report!()
        .args(export_args(
            data.to_str().unwrap(),
            out.to_str().unwrap(),
            "firewall",
        ))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("INVALID_DATA"));

    assert!(fixture.files_in("reports").is_empty());
}

#[test]
fn missing_data_file_is_argument_error() {
    let fixture = TestFixture::new();
    let missing = fixture.path().join("missing.json");

    zone_report!()
        .args(export_args(
            missing.to_str().unwrap(),
            fixture.path().to_str().unwrap(),
            "full",
        ))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to access file"));
}

#[test]
fn invalid_config_is_argument_error() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    let config = fixture.create_file("bad.toml", "[charts]\nwidth = 0\n");

    let mut args = export_args(
        data.to_str().unwrap(),
        fixture.path().to_str().unwrap(),
        "full",
    );
    args.extend(["--config", config.to_str().unwrap()]);

    zone_report!().args(args).assert().code(2);
}
