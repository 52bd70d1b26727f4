// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Naming compilation units after their object file

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DiagnosticsError;

/// One or more `/segment` components ending in `.o`
static OBJECT_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(/\w+)+\.o").expect("object path pattern is valid"));

/// Find the first object file path in a line
#[must_use]
pub fn object_path(line: &str) -> Option<&str> {
    OBJECT_PATH_RE.find(line).map(|m| m.as_str())
}

/// Base name of the first object file path in a line, without `.o`
///
/// `make: *** [/tmp/build/foo.o] Error 1` gives `foo`.
#[must_use]
pub fn unit_name(line: &str) -> Option<&str> {
    let path = object_path(line.trim())?;
    let file = path.rsplit('/').next().unwrap_or(path);
    Some(file.strip_suffix(".o").unwrap_or(file))
}

/// Derive the unit name from the last line of a unit buffer
///
/// # Errors
///
/// Returns `DiagnosticsError::UnitIdentification` if the last line holds no
/// object file path.
pub fn identify_unit(buffer: &[&str]) -> Result<String, DiagnosticsError> {
    let last = buffer.last().copied().unwrap_or_default();
    unit_name(last)
        .map(str::to_string)
        .ok_or_else(|| DiagnosticsError::UnitIdentification {
            line: last.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_object_path() {
        assert_eq!(
            object_path("make: *** [/tmp/build/foo.o] Error 1"),
            Some("/tmp/build/foo.o")
        );
        assert_eq!(object_path("make: *** [foo.o] Error 1"), None);
        assert_eq!(object_path("no path here"), None);
    }

    #[test]
    fn test_unit_name() {
        assert_eq!(unit_name("make: *** [/tmp/build/foo.o] Error 1"), Some("foo"));
        assert_eq!(unit_name("  make: *** [/obj/net_io.o] Error 1  "), Some("net_io"));
        assert_eq!(unit_name("/a.o"), Some("a"));
    }

    #[test]
    fn test_unit_name_stops_at_non_word_segment() {
        // `.` is not a word character, so only the trailing `/main.o` matches.
        assert_eq!(
            unit_name("make: *** [build/obj.dir/main.o] Error 1"),
            Some("main")
        );
    }

    #[test]
    fn test_identify_unit_uses_last_line() {
        let buffer = vec![
            "/src/other/bar.o: something",
            "/src/foo.cpp:1:1: error: x",
            "make: *** [/build/foo.o] Error 1",
        ];
        assert_eq!(identify_unit(&buffer).expect("should identify"), "foo");
    }

    #[test]
    fn test_identify_unit_without_object_path() {
        let buffer = vec!["/build/foo.o: bad", "make: *** [all] Error 2  "];
        let err = identify_unit(&buffer).expect_err("should fail");
        assert_eq!(
            err,
            DiagnosticsError::UnitIdentification {
                line: "make: *** [all] Error 2".to_string()
            }
        );
    }

    #[test]
    fn test_identify_empty_buffer() {
        let err = identify_unit(&[]).expect_err("should fail");
        assert!(matches!(err, DiagnosticsError::UnitIdentification { .. }));
    }
}
