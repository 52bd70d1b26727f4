// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error record types

use once_cell::sync::Lazy;
use regex::Regex;

/// `:<line>:<column>: <severity>: <description>`
static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":(\d+):(\d+):\s(\w+):\s*(.*)").expect("position pattern is valid")
});

/// Structured fields pulled out of a diagnostic's location line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Source line number, verbatim
    pub line: String,
    /// Source column number, verbatim
    pub column: String,
    /// Severity word (`error`, `warning`, `note`, ...)
    pub severity: String,
    /// Everything after the severity
    pub description: String,
}

impl ErrorInfo {
    /// Extract the positional fields from a trace line
    ///
    /// The first `:<digits>:<digits>: <word>:` sequence in the line wins.
    /// Returns `None` when the line has no such sequence.
    #[must_use]
    pub fn extract(line: &str) -> Option<Self> {
        let caps = POSITION_RE.captures(line)?;
        Some(Self {
            line: caps[1].to_string(),
            column: caps[2].to_string(),
            severity: caps[3].to_string(),
            description: caps[4].to_string(),
        })
    }

    /// Summary used as the failure message: `"{line}: ({severity}) {description}"`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: ({}) {}", self.line, self.severity, self.description)
    }
}

/// One diagnostic: its location trace, parsed info and message lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Inclusion/location lines, in input order, never empty
    pub trace: Vec<String>,
    /// Fields parsed from the last trace line
    pub info: ErrorInfo,
    /// Message lines, in input order; the first usually repeats `info`
    pub message: Vec<String>,
}

impl ErrorRecord {
    /// Trace lines followed by message lines
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.trace
            .iter()
            .chain(self.message.iter())
            .map(String::as_str)
    }
}

/// A compilation unit and the errors it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Object file base name without extension
    pub name: String,
    /// Error records in input order
    pub errors: Vec<ErrorRecord>,
}

impl Unit {
    /// Number of error records in the unit
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Every failed compilation unit from one diagnostic stream, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Units in input order
    pub units: Vec<Unit>,
}

impl Report {
    /// Number of units
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Total number of error records across all units
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.units.iter().map(Unit::error_count).sum()
    }

    /// Whether the report has no units at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of records with the given severity
    #[must_use]
    pub fn severity_count(&self, severity: &str) -> usize {
        self.units
            .iter()
            .flat_map(|u| u.errors.iter())
            .filter(|e| e.info.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn info(line: &str, severity: &str) -> ErrorInfo {
        ErrorInfo {
            line: line.to_string(),
            column: "1".to_string(),
            severity: severity.to_string(),
            description: "boom".to_string(),
        }
    }

    fn record(severity: &str) -> ErrorRecord {
        ErrorRecord {
            trace: vec!["/src/a.cpp:1:1: error: boom".to_string()],
            info: info("1", severity),
            message: vec!["  boom();".to_string()],
        }
    }

    #[test]
    fn test_extract_error_info() {
        let info = ErrorInfo::extract("/tmp/build/foo.h:10:5: error: missing ';'")
            .expect("should match");
        assert_eq!(info.line, "10");
        assert_eq!(info.column, "5");
        assert_eq!(info.severity, "error");
        assert_eq!(info.description, "missing ';'");
    }

    #[test]
    fn test_extract_keeps_description_verbatim() {
        let info = ErrorInfo::extract("a.cpp:3:14: warning:   unused <T> & 'x'  ")
            .expect("should match");
        assert_eq!(info.severity, "warning");
        assert_eq!(info.description, "unused <T> & 'x'  ");
    }

    #[test]
    fn test_extract_first_match_wins() {
        let info = ErrorInfo::extract("/a.h:1:2: note: see /b.h:3:4: error: other")
            .expect("should match");
        assert_eq!(info.line, "1");
        assert_eq!(info.severity, "note");
        assert_eq!(info.description, "see /b.h:3:4: error: other");
    }

    #[test]
    fn test_extract_requires_single_space_before_severity() {
        assert!(ErrorInfo::extract("a.cpp:1:2:error: no space").is_none());
    }

    #[test]
    fn test_extract_no_match() {
        assert!(ErrorInfo::extract("In file included from /tmp/foo.cpp:3:").is_none());
        assert!(ErrorInfo::extract("").is_none());
    }

    #[test]
    fn test_summary_format() {
        let info = ErrorInfo::extract("/x.cpp:42:7: error: expected '}'").expect("should match");
        assert_eq!(info.summary(), "42: (error) expected '}'");
    }

    #[test]
    fn test_body_lines_order() {
        let rec = ErrorRecord {
            trace: vec!["t1".to_string(), "t2".to_string()],
            info: info("1", "error"),
            message: vec!["m1".to_string()],
        };
        let body: Vec<&str> = rec.body_lines().collect();
        assert_eq!(body, vec!["t1", "t2", "m1"]);
    }

    #[test]
    fn test_report_helpers() {
        let report = Report {
            units: vec![
                Unit {
                    name: "foo".to_string(),
                    errors: vec![record("error"), record("warning")],
                },
                Unit {
                    name: "bar".to_string(),
                    errors: vec![record("error")],
                },
            ],
        };

        assert!(!report.is_empty());
        assert_eq!(report.unit_count(), 2);
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.severity_count("error"), 2);
        assert_eq!(report.severity_count("warning"), 1);
        assert_eq!(report.severity_count("note"), 0);
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.error_count(), 0);
    }
}
