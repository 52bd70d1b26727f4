// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Grouping a unit's diagnostic lines into error records
//!
//! g++ prints each diagnostic as one or more location lines (the include
//! chain and the `file:line:col: severity: text` line itself) followed by
//! free-form message lines such as the offending source and caret. The
//! parser walks a unit buffer line by line and cuts a new record every time a
//! location line follows message text.
//!
//! # Example
//!
//! ```
//! use gpptoxunit_diagnostics::parser::ErrorParser;
//!
//! let mut parser = ErrorParser::new();
//! parser.process_line("/src/foo.cpp:3:1: error: expected ';'").unwrap();
//! parser.process_line("    int x").unwrap();
//! let records = parser.finish().unwrap();
//! assert_eq!(records[0].info.line, "3");
//! ```

use tracing::debug;

use crate::error::DiagnosticsError;
use crate::record::{ErrorInfo, ErrorRecord};

/// How a trimmed line is treated by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Compiler banner or `make` chatter
    Ignored,
    /// Whitespace only
    Blank,
    /// Include chain or location line
    Trace,
    /// Diagnostic text
    Content,
}

/// Classify a raw line
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();
    if line.starts_with("cc1plus:") || line.starts_with("make") {
        LineKind::Ignored
    } else if line.starts_with('/') || line.starts_with("In file") || line.starts_with("from") {
        LineKind::Trace
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Content
    }
}

/// The record currently being assembled
#[derive(Debug, Clone, PartialEq, Eq)]
enum RecordState {
    /// No diagnostic text seen yet
    CollectingTrace { trace: Vec<String> },
    /// Info captured; further content lines extend the message
    CollectingMessage {
        trace: Vec<String>,
        info: ErrorInfo,
        message: Vec<String>,
    },
}

impl Default for RecordState {
    fn default() -> Self {
        Self::CollectingTrace { trace: Vec::new() }
    }
}

impl RecordState {
    /// Apply one trace or content line
    ///
    /// Returns the next state and the record that was closed by this line.
    fn accept(
        self,
        kind: LineKind,
        raw: &str,
    ) -> Result<(Self, Option<ErrorRecord>), DiagnosticsError> {
        let raw = raw.to_string();
        match (self, kind) {
            (Self::CollectingTrace { mut trace }, LineKind::Trace) => {
                trace.push(raw);
                Ok((Self::CollectingTrace { trace }, None))
            }
            (
                Self::CollectingMessage {
                    trace,
                    info,
                    message,
                },
                LineKind::Trace,
            ) => {
                let done = ErrorRecord {
                    trace,
                    info,
                    message,
                };
                Ok((Self::CollectingTrace { trace: vec![raw] }, Some(done)))
            }
            (Self::CollectingTrace { trace }, LineKind::Content) => {
                let info = match trace.last() {
                    Some(last) => extract_info(last)?,
                    None => return Err(DiagnosticsError::MissingTrace { line: raw }),
                };
                Ok((
                    Self::CollectingMessage {
                        trace,
                        info,
                        message: vec![raw],
                    },
                    None,
                ))
            }
            (
                Self::CollectingMessage {
                    trace,
                    info,
                    mut message,
                },
                LineKind::Content,
            ) => {
                message.push(raw);
                Ok((
                    Self::CollectingMessage {
                        trace,
                        info,
                        message,
                    },
                    None,
                ))
            }
            (state, LineKind::Ignored | LineKind::Blank) => Ok((state, None)),
        }
    }

    /// Close the record at end of input
    ///
    /// A record that never saw diagnostic text takes its info from its last
    /// trace line. A record with no lines at all is not a record.
    fn finish(self) -> Result<Option<ErrorRecord>, DiagnosticsError> {
        match self {
            Self::CollectingTrace { trace } => {
                let Some(last) = trace.last() else {
                    return Ok(None);
                };
                let info = extract_info(last)?;
                Ok(Some(ErrorRecord {
                    trace,
                    info,
                    message: Vec::new(),
                }))
            }
            Self::CollectingMessage {
                trace,
                info,
                message,
            } => Ok(Some(ErrorRecord {
                trace,
                info,
                message,
            })),
        }
    }
}

fn extract_info(trace_line: &str) -> Result<ErrorInfo, DiagnosticsError> {
    ErrorInfo::extract(trace_line).ok_or_else(|| DiagnosticsError::PatternMismatch {
        line: trace_line.to_string(),
    })
}

/// Line-at-a-time parser for one compilation unit
#[derive(Debug, Default)]
pub struct ErrorParser {
    state: RecordState,
    records: Vec<ErrorRecord>,
}

impl ErrorParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single raw line (without its terminator)
    ///
    /// Returns the record this line closed, if any.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticsError::PatternMismatch` if the first diagnostic
    /// line of a record follows a trace line without a
    /// `:line:column: severity:` sequence, and
    /// `DiagnosticsError::MissingTrace` if it follows no trace line at all.
    pub fn process_line(&mut self, line: &str) -> Result<Option<&ErrorRecord>, DiagnosticsError> {
        let kind = classify(line);
        if matches!(kind, LineKind::Ignored | LineKind::Blank) {
            return Ok(None);
        }

        let state = std::mem::take(&mut self.state);
        let (next, done) = state.accept(kind, line)?;
        self.state = next;

        let Some(record) = done else {
            return Ok(None);
        };
        debug!(
            line = %record.info.line,
            severity = %record.info.severity,
            "Closed error record"
        );
        self.records.push(record);
        Ok(self.records.last())
    }

    /// Records closed so far
    #[must_use]
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Close the in-progress record and return every record
    ///
    /// # Errors
    ///
    /// Returns `DiagnosticsError::PatternMismatch` if the in-progress record
    /// has only trace lines and the last one has no positional pattern.
    pub fn finish(mut self) -> Result<Vec<ErrorRecord>, DiagnosticsError> {
        if let Some(record) = self.state.finish()? {
            self.records.push(record);
        }
        Ok(self.records)
    }
}

/// Parse every error record in a unit buffer
///
/// # Errors
///
/// See [`ErrorParser::process_line`] and [`ErrorParser::finish`].
pub fn parse_errors(buffer: &[&str]) -> Result<Vec<ErrorRecord>, DiagnosticsError> {
    let mut parser = ErrorParser::new();
    for line in buffer {
        parser.process_line(line)?;
    }
    parser.finish()
}
