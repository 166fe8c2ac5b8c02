//! Report output: category mapping, document assembly, HTML serialization,
//! SVG charts and terminal progress.

mod assembler;
mod context;
mod document;
mod html;
mod html_template;
mod mapping;
mod progress;
pub mod svg;

pub use assembler::{DocumentAssembler, FOOTER_TEXT, REPORT_TITLE};
pub use context::RenderContext;
pub use document::{ChartSection, Document, Footer, Header, Metric, MetricGrid, Section};
pub use html::HtmlWriter;
pub use html_template::{STYLES, theme_variables};
pub use mapping::{CategoryPlan, ChartPlan, GridMetric, GridPlan, plan, time_label};
pub use progress::ProgressBarSink;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
