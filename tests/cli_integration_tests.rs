//! Integration tests for top-level CLI behavior, `init` and `categories`.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    zone_report!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn unknown_category_is_usage_error() {
    zone_report!()
        .args([
            "export",
            "--zone-id",
            "z",
            "--zone-name",
            "z",
            "--start",
            "2024-03-01T00:00:00Z",
            "--end",
            "2024-03-02T00:00:00Z",
            "--data",
            "d.json",
            "--category",
            "weather",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown export category"));
}

#[test]
fn categories_lists_selectors_in_order() {
    zone_report!()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("full"))
        .stdout(predicate::str::contains("status-codes"))
        .stdout(predicate::str::contains("firewall"));
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    zone_report!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".zone-report.toml")).unwrap();
    assert!(content.contains("[export]"));
    assert!(content.contains("[charts]"));
    assert!(content.contains("[theme]"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_file(".zone-report.toml", "# existing config\n");

    zone_report!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_file(".zone-report.toml", "# existing config\n");

    zone_report!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".zone-report.toml")).unwrap();
    assert!(content.contains("product_prefix"));
}

#[test]
fn local_config_is_discovered() {
    let fixture = TestFixture::new();
    let data = fixture.create_sample_data();
    fixture.create_file(".zone-report.toml", "[export]\nproduct_prefix = \"local\"\n");

    zone_report!()
        .current_dir(fixture.path())
        .args([
            "export",
            "--zone-id",
            "z",
            "--zone-name",
            "site",
            "--start",
            "2024-03-01T00:00:00Z",
            "--end",
            "2024-03-02T00:00:00Z",
            "--data",
            data.to_str().unwrap(),
            "--category",
            "traffic",
            "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("local-site-"));
}
