// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gpptoxunit: turn g++/make build failures into an xUnit test report
//!
//! Reads the captured compiler output named on the command line and writes
//! one `testsuite` per failed compilation unit to the report file.

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use gpptoxunit::config::Config;
use gpptoxunit::convert::convert_file;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Starting gpptoxunit");

    convert_file(&config).with_context(|| {
        format!(
            "converting {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    Ok(())
}
