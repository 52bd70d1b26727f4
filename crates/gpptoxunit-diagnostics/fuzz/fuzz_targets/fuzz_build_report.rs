// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for building a full report
//!
//! Arbitrary text goes through unit splitting, identification and parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gpptoxunit_diagnostics::{UNIT_SENTINEL, build_report};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Should never panic, only return errors
        if let Ok(report) = build_report(input) {
            let sentinels = input
                .lines()
                .filter(|l| l.trim().starts_with(UNIT_SENTINEL))
                .count();
            assert_eq!(report.unit_count(), sentinels);
        }
    }
});
