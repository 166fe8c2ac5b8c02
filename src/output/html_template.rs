//! Stylesheet and document chrome for the HTML report.
//!
//! Theme colors are emitted as `:root` custom properties; everything else is static.

use std::fmt::Write;

use crate::model::Theme;
use crate::output::svg::html_escape;

/// Static report styles. Colors come from the `:root` block built by [`theme_variables`].
pub const STYLES: &str = r"        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-background);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        .report-header { border-bottom: 4px solid var(--color-primary); padding-bottom: 1rem; margin-bottom: 2rem; }
        h1 { font-size: 1.875rem; font-weight: 700; color: var(--color-text); }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 2rem 0 1rem; color: var(--color-text); break-after: avoid; }
        h3 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; color: var(--color-text); }
        .meta { font-size: 0.875rem; color: var(--color-muted); }
        .meta dt { font-weight: 600; display: inline; }
        .meta dd { display: inline; margin-right: 1.5rem; }
        .metric-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
        .metric-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; break-inside: avoid; }
        .metric-card .value { font-size: 1.75rem; font-weight: 700; display: block; color: var(--color-primary); font-variant-numeric: tabular-nums; }
        .metric-card .label { font-size: 0.875rem; color: var(--color-muted); margin-top: 0.25rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; break-inside: avoid; }
        .chart-container svg { width: 100%; height: auto; max-width: 500px; }
        .legend { list-style: none; margin-top: 0.75rem; font-size: 0.8125rem; columns: 2; }
        .legend li { display: flex; align-items: center; gap: 0.5rem; padding: 0.125rem 0; }
        .legend .swatch { display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 2px; flex-shrink: 0; }
        .legend .share { color: var(--color-muted); }
        .note { font-size: 0.75rem; color: var(--color-muted); font-style: italic; margin-top: 0.5rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-muted); text-align: center; }
        .page-number::after { content: counter(page); }
        @page { margin: 1.5cm; @bottom-center { content: 'Page ' counter(page); } }
        @media print {
            body { background: white; padding: 0; }
            .metric-card, .chart-container { border: 1px solid #333; }
        }
";

/// `:root` block mapping theme colors to the CSS variables used by [`STYLES`] and charts.
#[must_use]
pub fn theme_variables(theme: &Theme) -> String {
    let mut output = String::from("        :root {\n");
    for (name, value) in [
        ("primary", &theme.primary),
        ("background", &theme.background),
        ("card", &theme.card),
        ("text", &theme.text),
        ("muted", &theme.muted),
        ("border", &theme.border),
    ] {
        let _ = writeln!(output, "            --color-{name}: {};", html_escape(value));
    }
    output.push_str("        }\n");
    output
}

/// Everything up to and including the opening container `<div>`.
pub fn write_head(output: &mut String, title: &str, theme: &Theme) {
    let _ = write!(
        output,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
{}{STYLES}    </style>
</head>
<body>
    <div class="container">
"#,
        html_escape(title),
        theme_variables(theme)
    );
}

/// Closes the container, body and document.
pub const HTML_TAIL: &str = "    </div>
</body>
</html>
";

#[cfg(test)]
#[path = "html_template_tests.rs"]
mod tests;
