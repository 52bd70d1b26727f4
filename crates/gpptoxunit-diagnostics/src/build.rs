// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Building a [`Report`] from raw diagnostic text

use tracing::debug;

use crate::error::DiagnosticsError;
use crate::parser::parse_errors;
use crate::record::{Report, Unit};
use crate::splitter::split_units;
use crate::unit::identify_unit;

/// Build one unit from its raw buffer
///
/// # Errors
///
/// Returns `DiagnosticsError::UnitIdentification` if the buffer's last line
/// names no object file, or a pattern mismatch from the error parser.
pub fn build_unit(buffer: &[&str]) -> Result<Unit, DiagnosticsError> {
    let name = identify_unit(buffer)?;
    let errors = parse_errors(buffer)?;
    debug!(unit = %name, errors = errors.len(), "Parsed compilation unit");
    Ok(Unit { name, errors })
}

/// Build the full report from a diagnostic stream
///
/// Lines may end in `\n` or `\r\n`. The first failing unit aborts the build.
///
/// # Errors
///
/// See [`build_unit`].
pub fn build_report(input: &str) -> Result<Report, DiagnosticsError> {
    let units = split_units(input.lines())
        .iter()
        .map(|buffer| build_unit(buffer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Report { units })
}
