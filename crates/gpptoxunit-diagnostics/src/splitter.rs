// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Splitting a diagnostic stream into compilation units
//!
//! `make` prints a `make: ***` line whenever a recipe fails. Everything up to
//! and including that line belongs to the unit that failed.

use tracing::debug;

/// Prefix of the line `make` prints when a unit fails to build
pub const UNIT_SENTINEL: &str = "make: ***";

/// Whether a raw line closes a compilation unit
#[must_use]
pub fn is_sentinel(line: &str) -> bool {
    line.trim().starts_with(UNIT_SENTINEL)
}

/// Partition raw lines into one buffer per failed compilation unit
///
/// Each buffer ends with its sentinel line. Lines after the last sentinel do
/// not form a unit and are dropped.
pub fn split_units<'a, I>(lines: I) -> Vec<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut units = Vec::new();
    let mut current = Vec::new();

    for line in lines {
        current.push(line);
        if is_sentinel(line) {
            units.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        debug!(
            dropped_lines = current.len(),
            "Dropping trailing lines without a unit sentinel"
        );
    }

    units
}
