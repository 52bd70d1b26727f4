// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xUnit XML rendering
//!
//! Each compilation unit becomes a `testsuite` and each error record a
//! `testcase` holding one `failure`. The layout is fixed so that two runs on
//! the same input produce identical bytes:
//!
//! ```text
//! <?xml version="1.0"?>
//! <testsuites>
//!     <testsuite name="foo">
//!         <testcase name="foo-1">
//!             <failure message="10: (error) missing ';'" type="error">
//!                 /tmp/build/foo.h:10:5: error: missing ';'
//!                 ...
//!             </failure>
//!         </testcase>
//!     </testsuite>
//! </testsuites>
//! ```
//!
//! Indentation is done with tabs. Characters that XML 1.0 does not allow,
//! such as the escape sequences of colored compiler output, are replaced
//! with U+FFFD.

use std::borrow::Cow;
use std::io::{self, Write};

use gpptoxunit_diagnostics::{ErrorRecord, Report, Unit};
use quick_xml::escape::escape;

/// XML declaration written at the top of every report
pub const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;

/// Separator between failure body lines
const BODY_SEPARATOR: &str = "\n\t\t\t\t";

const REPLACEMENT: char = '\u{FFFD}';

/// Render the whole report to a string
#[must_use]
pub fn render_report(report: &Report) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push_str("\n<testsuites>\n");
    for unit in &report.units {
        render_suite(&mut xml, unit);
    }
    xml.push_str("</testsuites>\n");
    xml
}

/// Render the report into a writer
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_report<W: Write>(report: &Report, mut out: W) -> io::Result<()> {
    out.write_all(render_report(report).as_bytes())?;
    out.flush()
}

fn render_suite(xml: &mut String, unit: &Unit) {
    let name = escape_text(&unit.name);
    xml.push_str(&format!("\t<testsuite name=\"{name}\">\n"));
    for (index, record) in unit.errors.iter().enumerate() {
        render_case(xml, &name, index + 1, record);
    }
    xml.push_str("\t</testsuite>\n");
}

fn render_case(xml: &mut String, unit_name: &str, number: usize, record: &ErrorRecord) {
    let summary = record.info.summary();
    xml.push_str(&format!("\t\t<testcase name=\"{unit_name}-{number}\">\n"));
    xml.push_str(&format!(
        "\t\t\t<failure message=\"{}\" type=\"{}\">{BODY_SEPARATOR}",
        escape_text(&summary),
        escape_text(&record.info.severity),
    ));
    xml.push_str(&join_escaped(&record.trace));
    xml.push_str(BODY_SEPARATOR);
    xml.push_str(&join_escaped(&record.message));
    xml.push_str("\n\t\t\t</failure>\n");
    xml.push_str("\t\t</testcase>\n");
}

fn join_escaped(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape_text(line))
        .collect::<Vec<_>>()
        .join(BODY_SEPARATOR)
}

/// Escape markup and replace characters outside the XML 1.0 `Char` range
fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_forbidden) {
        return escape(text);
    }
    let cleaned: String = text
        .chars()
        .map(|c| if is_forbidden(c) { REPLACEMENT } else { c })
        .collect();
    Cow::Owned(escape(cleaned.as_str()).into_owned())
}

fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}
