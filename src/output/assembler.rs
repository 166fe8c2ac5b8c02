//! Builds a [`Document`] from an analytics bundle and serializes it to HTML.
//!
//! Pure: no I/O. All memoization goes through the caller's [`RenderContext`],
//! which is reset at the start of every build.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::context::RenderContext;
use super::document::{ChartSection, Document, Footer, Header, Metric, MetricGrid, Section};
use super::html::HtmlWriter;
use super::mapping::{self, ChartPlan, GridPlan};
use super::svg::{ChartKind, ChartSpec, Palette};
use crate::config::ChartsConfig;
use crate::model::{AnalyticsBundle, ExportCategory, ReportRequest, Theme};
use crate::reduce::{sample_even_interval, top_n_by_value};

pub const REPORT_TITLE: &str = "Zone Analytics Report";
pub const FOOTER_TEXT: &str = "Generated by zone-report";

#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    charts: ChartsConfig,
    theme: Theme,
}

impl DocumentAssembler {
    #[must_use]
    pub const fn new(charts: ChartsConfig, theme: Theme) -> Self {
        Self { charts, theme }
    }

    /// The request theme when set, otherwise the configured one.
    #[must_use]
    pub fn theme_for<'a>(&'a self, request: &'a ReportRequest) -> &'a Theme {
        request.theme.as_ref().unwrap_or(&self.theme)
    }

    /// Build the document model. Absent, empty and all-zero content is skipped.
    pub fn build(
        &self,
        request: &ReportRequest,
        bundle: &AnalyticsBundle,
        generated_at: DateTime<Utc>,
        ctx: &mut RenderContext,
    ) -> Document {
        ctx.reset();

        let palette = Palette::new(self.theme_for(request).palette.clone());
        let mut sections = Vec::new();

        for category in bundle.populated() {
            let Some(record) = bundle.record(category) else {
                continue;
            };
            let plan = mapping::plan(&record);

            if let Some(grid) = plan.grid
                && !grid.is_blank()
            {
                sections.push(Section::MetricGrid(Self::grid_section(category, grid, ctx)));
            }

            for chart in plan.charts {
                if chart.is_blank() {
                    debug!(category = %category, chart = %chart.title, "Skipping empty chart");
                    continue;
                }
                sections.push(Section::Chart(self.chart_section(
                    category, chart, &palette, ctx,
                )));
            }
        }

        debug!(
            sections = sections.len(),
            format_hits = ctx.formats.hits(),
            chart_hits = ctx.charts.hits(),
            "Document assembled"
        );

        Document {
            header: Self::header(request, generated_at),
            sections,
            footer: Footer {
                text: FOOTER_TEXT.to_string(),
            },
        }
    }

    /// Build and serialize in one step.
    pub fn assemble(
        &self,
        request: &ReportRequest,
        bundle: &AnalyticsBundle,
        generated_at: DateTime<Utc>,
        ctx: &mut RenderContext,
    ) -> String {
        let document = self.build(request, bundle, generated_at, ctx);
        HtmlWriter::new(self.theme_for(request).clone()).write(&document)
    }

    fn header(request: &ReportRequest, generated_at: DateTime<Utc>) -> Header {
        let title = match request.category {
            ExportCategory::Full => REPORT_TITLE.to_string(),
            single => format!("{REPORT_TITLE}: {}", single.title()),
        };
        Header {
            title,
            zone_name: request.zone_name.clone(),
            zone_id: request.zone_id.clone(),
            account_tag: request.account_tag.clone(),
            period: format!(
                "{} to {}",
                request.start.format("%Y-%m-%d %H:%M UTC"),
                request.end.format("%Y-%m-%d %H:%M UTC")
            ),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    fn grid_section(
        category: ExportCategory,
        grid: GridPlan,
        ctx: &mut RenderContext,
    ) -> MetricGrid {
        let metrics = grid
            .metrics
            .into_iter()
            .map(|m| Metric {
                label: m.label.to_string(),
                value: m.value,
                unit: m.unit,
                formatted: ctx.formats.format(m.value, m.unit),
            })
            .collect();

        MetricGrid {
            category,
            title: grid.title,
            metrics,
        }
    }

    fn chart_section(
        &self,
        category: ExportCategory,
        chart: ChartPlan,
        palette: &Palette,
        ctx: &mut RenderContext,
    ) -> ChartSection {
        let reduced = match chart.kind {
            ChartKind::Pie => top_n_by_value(chart.points, self.charts.max_distribution_points),
            ChartKind::Line => sample_even_interval(chart.points, self.charts.max_timeseries_points),
        };
        let note = reduced.note(chart.noun);

        let spec = ChartSpec::new(chart.kind, chart.title.clone(), reduced.data)
            .with_size(f64::from(self.charts.width), f64::from(self.charts.height))
            .with_palette(palette.clone())
            .with_unit(chart.unit);

        let RenderContext { formats, charts } = ctx;
        let rendered = charts.render(&spec, formats);

        ChartSection {
            category,
            title: chart.title,
            chart: rendered,
            note,
        }
    }
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
