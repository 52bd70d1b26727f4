// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the gpptoxunit command
//!
//! This module provides the command-line surface: the diagnostic input
//! file, the report destination and logging options.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Report destination used when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "gpptoxunit.xml";

/// gpptoxunit - turn g++/make build failures into an xUnit test report
#[derive(Parser, Debug, Clone)]
#[command(name = "gpptoxunit")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File containing the raw compiler/make output
    pub input: PathBuf,

    /// Path of the XML report to write
    ///
    /// The file is created or fully overwritten.
    #[arg(short, long, env = "GPPTOXUNIT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Create a config for converting `input` into `output`
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path doesn't exist or is not a regular file
    /// - The output path's parent directory doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input.exists() {
            return Err(ConfigError::InputNotFound(self.input.clone()));
        }
        if !self.input.is_file() {
            return Err(ConfigError::InputNotFile(self.input.clone()));
        }

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(ConfigError::OutputDirectoryNotFound(parent.to_path_buf()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Whether the report goes to the default destination
    #[must_use]
    pub fn uses_default_output(&self) -> bool {
        self.output == Path::new(DEFAULT_OUTPUT)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// Output directory does not exist
    #[error("Output directory not found: {0}")]
    OutputDirectoryNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("gpptoxunit.xml"));
        assert!(config.uses_default_output());
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_new_sets_paths() {
        let config = Config::new("build.log", "out/report.xml");
        assert_eq!(config.input, PathBuf::from("build.log"));
        assert_eq!(config.output, PathBuf::from("out/report.xml"));
        assert!(!config.uses_default_output());
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_input() {
        let config = Config::new("/nonexistent/path/12345/build.log", "report.xml");
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFound(_))));
    }

    #[test]
    fn test_validate_directory_input() {
        let config = Config::new(std::env::temp_dir(), "report.xml");
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::InputNotFile(_))));
    }

    #[test]
    fn test_validate_missing_output_directory() {
        let input = std::env::current_exe().expect("test binary path");
        let config = Config::new(input, "/nonexistent/dir/12345/report.xml");
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::OutputDirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_validate_bare_output_file_name() {
        let input = std::env::current_exe().expect("test binary path");
        let config = Config::new(input, DEFAULT_OUTPUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
