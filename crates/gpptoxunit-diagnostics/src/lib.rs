// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gpptoxunit-diagnostics: g++/make diagnostic parsing for gpptoxunit
//!
//! This library crate splits raw compiler output into failed compilation
//! units and groups each unit's lines into error records, ready to be
//! rendered as a test report.
//!
//! # Example
//!
//! ```
//! use gpptoxunit_diagnostics::build_report;
//!
//! let output = "/src/foo.cpp:3:1: error: expected ';'\n\
//!               make: *** [/obj/foo.o] Error 1\n";
//! let report = build_report(output).unwrap();
//! assert_eq!(report.units[0].name, "foo");
//! assert_eq!(report.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod build;
pub mod error;
pub mod parser;
pub mod record;
pub mod splitter;
pub mod unit;

pub use build::{build_report, build_unit};
pub use error::DiagnosticsError;
pub use parser::{ErrorParser, LineKind, classify, parse_errors};
pub use record::{ErrorInfo, ErrorRecord, Report, Unit};
pub use splitter::{UNIT_SENTINEL, split_units};
pub use unit::identify_unit;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::build::build_report;
    pub use crate::error::DiagnosticsError;
    pub use crate::parser::ErrorParser;
    pub use crate::record::{ErrorInfo, ErrorRecord, Report, Unit};
}
