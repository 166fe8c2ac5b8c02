use super::*;
use crate::format::UnitKind;
use crate::model::ExportCategory;
use crate::output::document::{Footer, Metric};
use crate::output::svg::{LegendEntry, RenderedChart};

fn header() -> Header {
    Header {
        title: "Zone Analytics Report".to_string(),
        zone_name: "shop & co".to_string(),
        zone_id: "z1".to_string(),
        account_tag: None,
        period: "2024-03-01 00:00 UTC to 2024-03-02 00:00 UTC".to_string(),
        generated_at: "2024-03-02T00:00:00Z".to_string(),
    }
}

fn document(sections: Vec<Section>) -> Document {
    Document {
        header: header(),
        sections,
        footer: Footer {
            text: "Generated by zone-report".to_string(),
        },
    }
}

fn grid(category: ExportCategory) -> Section {
    Section::MetricGrid(MetricGrid {
        category,
        title: "Overview".to_string(),
        metrics: vec![Metric {
            label: "Total Requests".to_string(),
            value: 1_500_000.0,
            unit: UnitKind::Count,
            formatted: "1.5M".to_string(),
        }],
    })
}

fn chart(category: ExportCategory, note: Option<&str>) -> Section {
    Section::Chart(ChartSection {
        category,
        title: "Requests by Country".to_string(),
        chart: RenderedChart {
            svg: "<svg>\n    <path/>\n</svg>".to_string(),
            legend: vec![LegendEntry {
                label: "US".to_string(),
                color: "#f38020".to_string(),
                value: "1.0K".to_string(),
                share: Some("50.0%".to_string()),
            }],
        },
        note: note.map(str::to_string),
    })
}

#[test]
fn writes_complete_document() {
    let html = HtmlWriter::default().write(&document(vec![grid(ExportCategory::Traffic)]));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("<h1>Zone Analytics Report</h1>"));
    assert!(html.contains("shop &amp; co (z1)"));
    assert!(html.contains("class=\"page-number\""));
}

#[test]
fn account_tag_is_shown_when_present() {
    let mut doc = document(Vec::new());
    doc.header.account_tag = Some("acct-9".to_string());

    let html = HtmlWriter::default().write(&doc);
    assert!(html.contains("<dt>Account:</dt> <dd>acct-9</dd>"));
}

#[test]
fn category_heading_written_once_per_category() {
    let html = HtmlWriter::default().write(&document(vec![
        grid(ExportCategory::Traffic),
        chart(ExportCategory::Traffic, None),
        chart(ExportCategory::Geo, None),
    ]));

    assert_eq!(html.matches("<h2>Traffic</h2>").count(), 1);
    assert_eq!(html.matches("<h2>Geography</h2>").count(), 1);
}

#[test]
fn metric_cards_show_formatted_value() {
    let html = HtmlWriter::default().write(&document(vec![grid(ExportCategory::Traffic)]));

    assert!(html.contains(r#"<span class="value">1.5M</span>"#));
    assert!(html.contains(r#"<span class="label">Total Requests</span>"#));
}

#[test]
fn chart_includes_svg_legend_and_note() {
    let html = HtmlWriter::default().write(&document(vec![chart(
        ExportCategory::Geo,
        Some("Showing top 50 of 75 countries."),
    )]));

    assert!(html.contains("<h3>Requests by Country</h3>"));
    assert!(html.contains("<path/>"));
    assert!(html.contains(r#"style="background: #f38020""#));
    assert!(html.contains(r#"US: 1.0K <span class="share">(50.0%)</span>"#));
    assert!(html.contains(r#"<p class="note">Showing top 50 of 75 countries.</p>"#));
}

#[test]
fn chart_without_note_has_no_note_paragraph() {
    let html = HtmlWriter::default().write(&document(vec![chart(ExportCategory::Geo, None)]));
    assert!(!html.contains("class=\"note\""));
}
