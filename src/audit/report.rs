// src/audit/report.rs
// =============================================================================
// This module renders a CheckReport as formatted JSON text.
//
// Output shape:
//   {
//       "div#main": true,
//       "h1": false
//   }
//
// Key order is the report's own (lexicographic) order, booleans are literal
// true/false, and the indent is fixed at 4 spaces. serde_json's default
// pretty printer indents by 2, so we plug in a PrettyFormatter with an
// explicit 4-space indent instead of calling to_string_pretty.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::evaluate::CheckReport;

// Renders the report as indented JSON
//
// The empty report renders as "{}". Serialization of a well-formed report
// cannot fail (we write into a Vec, so there is no I/O to go wrong); the
// Result keeps the caller's `?` chain uniform.
pub fn render(report: &CheckReport) -> Result<String> {
    let mut buf = Vec::new();

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{evaluate, Document};

    // Builds a report through the real pipeline so these tests also cover
    // the evaluate -> render seam
    fn report_for(html: &str, checks: &[&str]) -> CheckReport {
        let document = Document::parse(html);
        let checks: Vec<String> = checks.iter().map(|s| s.to_string()).collect();
        evaluate(&document, &checks).unwrap()
    }

    #[test]
    fn test_renders_with_four_space_indent() {
        let report = report_for(r#"<div id="main"></div>"#, &["div#main", "h1"]);

        let rendered = render(&report).unwrap();

        assert_eq!(
            rendered,
            "{\n    \"div#main\": true,\n    \"h1\": false\n}"
        );
    }

    #[test]
    fn test_empty_report_renders_as_empty_object() {
        let report = report_for("<html></html>", &[]);
        assert_eq!(render(&report).unwrap(), "{}");
    }

    #[test]
    fn test_round_trips_through_json() {
        let report = report_for(
            r#"<html><head><title>T</title></head><body><div id="main"></div></body></html>"#,
            &["title", "h1", "div#main"],
        );

        let rendered = render(&report).unwrap();
        let parsed: CheckReport = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, report);
    }

    #[test]
    fn test_key_order_matches_report_order() {
        let report = report_for(
            r#"<html><head><title>T</title></head><body><div id="main"></div></body></html>"#,
            &["title", "h1", "div#main"],
        );

        let rendered = render(&report).unwrap();

        // Sorted keys, sorted output
        let div = rendered.find("div#main").unwrap();
        let h1 = rendered.find("\"h1\"").unwrap();
        let title = rendered.find("title").unwrap();
        assert!(div < h1 && h1 < title);
    }
}
