//! Tests for SVG module exports.

use super::*;
use crate::format::FormatCache;

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::hex("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: Palette = Palette::default();
    let _: DistributionPoint = DataPoint::new("test", 100.0);
    let _: TimeSeriesPoint = DataPoint::new("2024-01-01T00:00:00Z", 1.0);
}

#[test]
fn cached_rendering_is_byte_identical() {
    let points = vec![
        DataPoint::new("HTTP/2", 700.0),
        DataPoint::new("HTTP/1.1", 250.0),
        DataPoint::new("HTTP/3", 50.0),
    ];
    let spec = ChartSpec::pie("Protocols", points);

    let mut cache = ChartCache::new();
    let mut formats = FormatCache::new();
    let first = cache.render(&spec, &mut formats);
    let second = cache.render(&spec, &mut formats);

    assert_eq!(first.svg, second.svg);
    assert_eq!(first, render_chart(&spec, &mut FormatCache::new()));
}
