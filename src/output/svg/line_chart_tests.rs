use super::*;
use crate::format::UnitKind;
use crate::output::svg::chart::render_chart;
use crate::output::svg::data::DataPoint;

fn series(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(format!("t{i}"), *v))
        .collect()
}

mod layout_tests {
    use super::*;

    #[test]
    fn margins_define_plot_area() {
        let layout = LineLayout::new(&[1.0, 2.0], 500.0, 300.0);

        assert!((layout.left - 60.0).abs() < f64::EPSILON);
        assert!((layout.right - 480.0).abs() < f64::EPSILON);
        assert!((layout.top - 20.0).abs() < f64::EPSILON);
        assert!((layout.bottom - 260.0).abs() < f64::EPSILON);
    }

    #[test]
    fn range_includes_zero() {
        let layout = LineLayout::new(&[50.0, 100.0], 500.0, 300.0);
        assert!(layout.y_min.abs() < f64::EPSILON);
        assert!((layout.y_max - 100.0).abs() < f64::EPSILON);

        let negative = LineLayout::new(&[-10.0, 5.0], 500.0, 300.0);
        assert!((negative.y_min + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_range_is_widened() {
        let layout = LineLayout::new(&[0.0, 0.0, 0.0], 500.0, 300.0);
        assert!((layout.y_max - 1.0).abs() < f64::EPSILON);

        let y = layout.y_at(0.0);
        assert!(y.is_finite());
        assert!((y - layout.bottom).abs() < 1e-9);
    }

    #[test]
    fn extremes_map_to_plot_edges() {
        let layout = LineLayout::new(&[0.0, 40.0, 80.0], 500.0, 300.0);

        assert!((layout.y_at(80.0) - layout.top).abs() < 1e-9);
        assert!((layout.y_at(0.0) - layout.bottom).abs() < 1e-9);
        assert!((layout.x_at(0) - layout.left).abs() < 1e-9);
        assert!((layout.x_at(2) - layout.right).abs() < 1e-9);
        assert!((layout.x_at(1) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_centred() {
        let layout = LineLayout::new(&[7.0], 500.0, 300.0);
        assert!((layout.x_at(0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn six_gridlines_from_max_to_min() {
        let layout = LineLayout::new(&[0.0, 100.0], 500.0, 300.0);
        let lines = layout.gridlines();

        assert_eq!(lines.len(), GRIDLINE_COUNT);
        assert!((lines[0].0 - layout.top).abs() < 1e-9);
        assert!((lines[0].1 - 100.0).abs() < 1e-9);
        assert!((lines[5].0 - layout.bottom).abs() < 1e-9);
        assert!(lines[5].1.abs() < 1e-9);
        assert!((lines[1].1 - 80.0).abs() < 1e-9);
    }

    #[test]
    fn label_every_ceil_n_over_eight() {
        let small = LineLayout::new(&[1.0; 5], 500.0, 300.0);
        assert_eq!(small.label_indices(), vec![0, 1, 2, 3, 4]);

        let hundred = LineLayout::new(&[1.0; 100], 500.0, 300.0);
        let indices = hundred.label_indices();
        assert_eq!(indices[1], 13);
        assert_eq!(indices.len(), 8);
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn draws_polyline_markers_and_gridlines() {
        let mut formats = FormatCache::new();
        let chart = render_chart(
            &ChartSpec::line("Requests", series(&[10.0, 20.0, 15.0, 30.0])),
            &mut formats,
        );

        assert_eq!(chart.svg.matches("<polyline").count(), 1);
        assert_eq!(chart.svg.matches("<circle").count(), 4);
        assert_eq!(chart.svg.matches("stroke-dasharray").count(), GRIDLINE_COUNT);
        assert!(chart.svg.contains(">t0</text>"));
    }

    #[test]
    fn gridline_labels_use_unit() {
        let mut formats = FormatCache::new();
        let spec = ChartSpec::line("Bandwidth", series(&[0.0, 1024.0 * 1024.0]))
            .with_unit(UnitKind::Bytes);
        let chart = render_chart(&spec, &mut formats);

        assert!(chart.svg.contains(">1.00 MB</text>"));
        assert!(chart.svg.contains(">0 B</text>"));
    }

    #[test]
    fn legend_reports_peak() {
        let mut formats = FormatCache::new();
        let chart = render_chart(
            &ChartSpec::line("Threats", series(&[3.0, 9.0, 1.0])),
            &mut formats,
        );

        assert_eq!(chart.legend.len(), 1);
        assert_eq!(chart.legend[0].label, "Threats (peak)");
        assert_eq!(chart.legend[0].value, "9");
        assert!(chart.legend[0].share.is_none());
    }

    #[test]
    fn flat_zero_series_renders_finite_coordinates() {
        let mut formats = FormatCache::new();
        let chart = render_chart(&ChartSpec::line("Flat", series(&[0.0; 4])), &mut formats);

        assert!(!chart.svg.contains("NaN"));
        assert!(!chart.svg.contains("inf"));
    }
}
