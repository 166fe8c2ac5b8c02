//! Text and coordinate formatting for SVG output.

/// Escape text for safe inclusion in SVG/HTML content and attributes.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with two decimals, normalizing negative zero.
#[must_use]
pub fn coord(value: f64) -> String {
    let rounded = format!("{value:.2}");
    if rounded == "-0.00" {
        "0.00".to_string()
    } else {
        rounded
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
