// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use gpptoxunit::xunit::render_report;
use gpptoxunit_diagnostics::build_report;

fn sample_output(units: usize, errors_per_unit: usize) -> String {
    let mut out = String::new();
    for u in 0..units {
        for e in 0..errors_per_unit {
            out.push_str(&format!(
                "/src/unit{u}.cpp:{}:9: error: no match for 'operator<<' (operand types are 'A&' and 'B')\n",
                e + 1
            ));
            out.push_str("     std::cout << a << b;\n");
            out.push_str("               ^\n");
        }
        out.push_str(&format!("make: *** [/build/obj/unit{u}.o] Error 1\n"));
    }
    out
}

fn xunit_benchmark(c: &mut Criterion) {
    let report = build_report(&sample_output(50, 20)).expect("sample output parses");
    c.bench_function("render_report_50x20", |b| {
        b.iter(|| render_report(std::hint::black_box(&report)))
    });
}

criterion_group!(benches, xunit_benchmark);
criterion_main!(benches);
