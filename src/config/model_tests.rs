use super::*;

#[test]
fn defaults() {
    let config = Config::default();

    assert_eq!(config.export.product_prefix, "zone-report");
    assert_eq!(config.export.storage_estimate_bytes, 5_242_880);
    assert_eq!(config.export.slow_warning(), Duration::from_secs(30));
    assert_eq!(config.charts.width, 500);
    assert_eq!(config.charts.height, 300);
    assert_eq!(config.charts.max_distribution_points, 50);
    assert_eq!(config.charts.max_timeseries_points, 100);
    assert_eq!(config.theme.palette.len(), 6);
}

#[test]
fn empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let content = r##"
[export]
slow_warning_secs = 5

[charts]
width = 640

[theme]
primary = "#000000"
"##;
    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.export.slow_warning_secs, 5);
    assert_eq!(config.export.product_prefix, "zone-report");
    assert_eq!(config.charts.width, 640);
    assert_eq!(config.charts.height, 300);
    assert_eq!(config.theme.primary, "#000000");
    assert_eq!(config.theme.palette.len(), 6);
}

#[test]
fn default_config_round_trips_through_toml() {
    let text = toml::to_string_pretty(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}
