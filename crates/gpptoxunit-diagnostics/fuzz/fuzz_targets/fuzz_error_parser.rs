// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the error parser
//!
//! This fuzzes the `ErrorParser` which groups a unit's diagnostic lines
//! into error records one line at a time.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gpptoxunit_diagnostics::ErrorParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parser = ErrorParser::new();

        // Process each line - parser should never panic
        for line in input.lines() {
            if parser.process_line(line).is_err() {
                return;
            }
        }

        // Finalize should never panic, and every record has a trace
        if let Ok(records) = parser.finish() {
            assert!(records.iter().all(|r| !r.trace.is_empty()));
        }
    }
});
