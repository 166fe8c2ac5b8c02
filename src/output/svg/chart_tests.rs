//! Tests for chart descriptions and dispatch.

use super::*;

#[test]
fn defaults_match_report_layout() {
    let spec = ChartSpec::pie("Countries", Vec::new());

    assert_eq!(spec.kind, ChartKind::Pie);
    assert!((spec.width - 500.0).abs() < f64::EPSILON);
    assert!((spec.height - 300.0).abs() < f64::EPSILON);
    assert_eq!(spec.unit, UnitKind::Count);
    assert_eq!(spec.palette, Palette::default());
}

#[test]
fn builders_override_fields() {
    let spec = ChartSpec::line("Bandwidth", Vec::new())
        .with_size(640.0, 240.0)
        .with_unit(UnitKind::Bytes)
        .with_palette(Palette::new(vec!["#000000".to_string()]));

    assert_eq!(spec.kind, ChartKind::Line);
    assert!((spec.width - 640.0).abs() < f64::EPSILON);
    assert_eq!(spec.unit, UnitKind::Bytes);
    assert_eq!(spec.palette.len(), 1);
}

#[test]
fn placeholder_has_message_and_no_legend() {
    let chart = placeholder(&ChartSpec::pie("Empty", Vec::new()));

    assert!(chart.svg.contains(NO_DATA_MESSAGE));
    assert!(chart.svg.contains(r#"text-anchor="middle""#));
    assert!(chart.legend.is_empty());
    assert!(chart.is_placeholder());
}

#[test]
fn empty_inputs_render_placeholder_for_both_kinds() {
    let mut formats = FormatCache::new();
    for spec in [
        ChartSpec::pie("Empty pie", Vec::new()),
        ChartSpec::line("Empty line", Vec::new()),
    ] {
        let chart = render_chart(&spec, &mut formats);
        assert!(chart.is_placeholder(), "{}", spec.title);
        assert!(!chart.svg.contains("<path"));
        assert!(!chart.svg.contains("<polyline"));
    }
}

#[test]
fn dispatch_follows_kind() {
    let mut formats = FormatCache::new();
    let points = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)];

    let pie = render_chart(&ChartSpec::pie("Pie", points.clone()), &mut formats);
    let line = render_chart(&ChartSpec::line("Line", points), &mut formats);

    assert!(pie.svg.contains("<path"));
    assert!(line.svg.contains("<polyline"));
}

#[test]
fn kind_names() {
    assert_eq!(ChartKind::Pie.as_str(), "pie");
    assert_eq!(ChartKind::Line.as_str(), "line");
}
