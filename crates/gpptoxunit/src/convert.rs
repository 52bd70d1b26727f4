// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Diagnostic file to xUnit report conversion
//!
//! The input is read and parsed completely before the destination is
//! opened, so a parse failure never touches an existing report.
//!
//! # Example
//!
//! ```no_run
//! use gpptoxunit::{Config, convert_file};
//!
//! let config = Config::new("build.log", "report.xml");
//! let stats = convert_file(&config).expect("convert");
//! println!("{} units, {} errors", stats.units, stats.errors);
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use gpptoxunit_diagnostics::{DiagnosticsError, Report, build_report};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ConvertError;
use crate::xunit::{render_report, write_report};

/// Counts from a finished conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Failed compilation units (`testsuite` elements)
    pub units: usize,
    /// Error records (`testcase` elements)
    pub errors: usize,
    /// Records with `error` severity
    pub error_severity: usize,
    /// Records with `warning` severity
    pub warning_severity: usize,
    /// Where the report was written
    pub output: PathBuf,
}

impl ConvertStats {
    fn from_report(report: &Report, output: PathBuf) -> Self {
        Self {
            units: report.unit_count(),
            errors: report.error_count(),
            error_severity: report.severity_count("error"),
            warning_severity: report.severity_count("warning"),
            output,
        }
    }
}

/// Convert diagnostic text into the xUnit document
///
/// # Errors
///
/// Returns the first unit identification or pattern mismatch error.
pub fn convert_str(input: &str) -> Result<String, DiagnosticsError> {
    let report = build_report(input)?;
    Ok(render_report(&report))
}

/// Convert the configured input file and write the report
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input can't be
/// read, the diagnostics can't be parsed, or the report can't be written.
pub fn convert_file(config: &Config) -> Result<ConvertStats, ConvertError> {
    config.validate()?;

    info!(input = %config.input.display(), "Reading diagnostics");
    let bytes = std::fs::read(&config.input).map_err(|source| ConvertError::InputAccess {
        path: config.input.clone(),
        source,
    })?;
    let input = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "Read diagnostic output");

    let report = build_report(&input)?;

    let output_err = |source: std::io::Error| ConvertError::OutputWrite {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(output_err)?;
    write_report(&report, BufWriter::new(file)).map_err(output_err)?;

    let stats = ConvertStats::from_report(&report, config.output.clone());
    info!(
        units = stats.units,
        errors = stats.errors,
        error_severity = stats.error_severity,
        warning_severity = stats.warning_severity,
        output = %stats.output.display(),
        "Report written"
    );

    Ok(stats)
}
