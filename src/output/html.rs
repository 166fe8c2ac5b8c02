use std::fmt::Write;

use super::document::{ChartSection, Document, Header, MetricGrid, Section};
use super::html_template::{HTML_TAIL, write_head};
use super::svg::html_escape;
use crate::model::Theme;

/// Serializes a [`Document`] into one self-contained HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    theme: Theme,
}

impl HtmlWriter {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn write(&self, document: &Document) -> String {
        let mut output = String::new();

        write_head(&mut output, &document.header.title, &self.theme);
        Self::write_header(&mut output, &document.header);

        let mut current = None;
        for section in &document.sections {
            let category = section.category();
            if current != Some(category) {
                let _ = writeln!(output, "        <h2>{}</h2>", html_escape(category.title()));
                current = Some(category);
            }
            match section {
                Section::MetricGrid(grid) => Self::write_grid(&mut output, grid),
                Section::Chart(chart) => Self::write_chart(&mut output, chart),
            }
        }

        let _ = writeln!(
            output,
            r#"        <div class="footer">{} &middot; Page <span class="page-number"></span></div>"#,
            html_escape(&document.footer.text)
        );
        output.push_str(HTML_TAIL);
        output
    }

    fn write_header(output: &mut String, header: &Header) {
        output.push_str("        <header class=\"report-header\">\n");
        let _ = writeln!(output, "            <h1>{}</h1>", html_escape(&header.title));
        output.push_str("            <dl class=\"meta\">\n");

        let mut fields = vec![
            ("Zone", format!("{} ({})", header.zone_name, header.zone_id)),
            ("Period", header.period.clone()),
            ("Generated", header.generated_at.clone()),
        ];
        if let Some(account) = &header.account_tag {
            fields.insert(1, ("Account", account.clone()));
        }
        for (label, value) in fields {
            let _ = writeln!(
                output,
                "                <dt>{label}:</dt> <dd>{}</dd>",
                html_escape(&value)
            );
        }

        output.push_str("            </dl>\n");
        output.push_str("        </header>\n");
    }

    fn write_grid(output: &mut String, grid: &MetricGrid) {
        let _ = writeln!(
            output,
            r#"        <div class="metric-grid" aria-label="{}">"#,
            html_escape(&grid.title)
        );
        for metric in &grid.metrics {
            let _ = writeln!(
                output,
                r#"            <div class="metric-card">
                <span class="value">{}</span>
                <span class="label">{}</span>
            </div>"#,
                html_escape(&metric.formatted),
                html_escape(&metric.label)
            );
        }
        output.push_str("        </div>\n");
    }

    fn write_chart(output: &mut String, section: &ChartSection) {
        output.push_str("        <div class=\"chart-container\">\n");
        let _ = writeln!(output, "            <h3>{}</h3>", html_escape(&section.title));

        for line in section.chart.svg.lines() {
            let _ = writeln!(output, "            {line}");
        }

        if !section.chart.legend.is_empty() {
            output.push_str("            <ul class=\"legend\">\n");
            for entry in &section.chart.legend {
                let share = entry
                    .share
                    .as_ref()
                    .map(|s| format!(r#" <span class="share">({})</span>"#, html_escape(s)))
                    .unwrap_or_default();
                let _ = writeln!(
                    output,
                    r#"                <li><span class="swatch" style="background: {}"></span>{}: {}{share}</li>"#,
                    html_escape(&entry.color),
                    html_escape(&entry.label),
                    html_escape(&entry.value)
                );
            }
            output.push_str("            </ul>\n");
        }

        if let Some(note) = &section.note {
            let _ = writeln!(output, r#"            <p class="note">{}</p>"#, html_escape(note));
        }

        output.push_str("        </div>\n");
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
