// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gpptoxunit

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The input file could not be read
    #[error("Failed to read input {path}: {source}")]
    InputAccess {
        /// The input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Unit identification or pattern extraction failed
    #[error("Diagnostics error: {0}")]
    Diagnostics(#[from] gpptoxunit_diagnostics::DiagnosticsError),

    /// The report could not be written
    #[error("Failed to write report {path}: {source}")]
    OutputWrite {
        /// The destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
