// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gpptoxunit library
//!
//! This module exports the conversion pipeline of the gpptoxunit command for
//! use in integration tests and as a library.

pub mod config;
pub mod convert;
pub mod error;
pub mod xunit;

pub use config::{Config, ConfigError};
pub use convert::{ConvertStats, convert_file, convert_str};
pub use error::ConvertError;
