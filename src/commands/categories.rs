use std::fmt::Write;

use crate::EXIT_SUCCESS;
use crate::model::{DOCUMENT_ORDER, ExportCategory};

#[must_use]
pub fn run_categories() -> i32 {
    print!("{}", categories_text());
    EXIT_SUCCESS
}

/// One line per selector: `full` first, then the categories in report order.
#[must_use]
pub fn categories_text() -> String {
    let mut output = String::new();
    for category in std::iter::once(ExportCategory::Full).chain(DOCUMENT_ORDER) {
        let _ = writeln!(output, "{:<14}{}", category.as_str(), category.title());
    }
    output
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;
