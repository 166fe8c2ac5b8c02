//! SVG document builder shared by the chart renderers.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Builder for a self-contained `<svg>` document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        let rendered = element.render();
        if !rendered.is_empty() {
            self.elements.push(rendered);
        }
        self
    }

    #[must_use]
    pub fn push_all<E: SvgElement>(self, elements: &[E]) -> Self {
        elements.iter().fold(self, Self::push_element)
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            r#"<svg viewBox="0 0 {} {}" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" role="img""#,
            self.width, self.height, self.width, self.height
        );
        if self.title.is_empty() {
            output.push_str(">\n");
        } else {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r#" aria-label="{escaped}">"#);
            let _ = writeln!(output, "    <title>{escaped}</title>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
