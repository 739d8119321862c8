// ABOUTME: Configuration error types for scoring configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Configuration error types for scoring configuration validation.

use combat_power_core::errors::AssessmentError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order (e.g., benchmark after baseline)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AssessmentError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}
