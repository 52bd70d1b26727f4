// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gpptoxunit-diagnostics

use thiserror::Error;

/// Errors that can occur while turning diagnostic output into error records
///
/// None of these are recovered from internally: a single failure aborts the
/// whole conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiagnosticsError {
    /// The last line of a unit buffer names no object file
    #[error("Cannot identify compilation unit: no object file path in line {line:?}")]
    UnitIdentification {
        /// The trimmed last line of the unit buffer
        line: String,
    },

    /// A trace line lacks the `:line:column: severity:` pattern
    #[error("Pattern mismatch: no `:line:column: severity:` sequence in trace line {line:?}")]
    PatternMismatch {
        /// The trace line the pattern was applied to
        line: String,
    },

    /// A message line arrived before any trace line in its record
    #[error("Pattern mismatch: diagnostic line {line:?} has no preceding trace line")]
    MissingTrace {
        /// The message line that needed a trace line
        line: String,
    },
}

impl DiagnosticsError {
    /// Whether this error comes from positional pattern extraction
    #[must_use]
    pub fn is_pattern_mismatch(&self) -> bool {
        matches!(self, Self::PatternMismatch { .. } | Self::MissingTrace { .. })
    }
}
