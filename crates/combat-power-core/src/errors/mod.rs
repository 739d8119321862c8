// ABOUTME: Unified error type and error codes for assessment scoring
// ABOUTME: Every scoring operation reports failures through AssessmentError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Assessment Error Handling
//!
//! Scoring is deterministic and has no I/O in the hot path, so the error
//! surface is small: bad or missing user input, an exercise the standards do
//! not cover, malformed standards data, and invalid configuration. Each
//! variant maps to a stable [`ErrorCode`] that presentation layers can
//! serialize without parsing messages.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ProfileField;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A measurement is non-numeric, negative, zero or otherwise unusable
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A demographic field required for bracket lookup is absent
    #[serde(rename = "MISSING_PREREQUISITE")]
    MissingPrerequisite = 3001,
    /// Repetition count exceeds the estimator's valid range
    #[serde(rename = "INVALID_REPS")]
    InvalidReps = 3002,

    // Resource Management (4000-4999)
    /// No standards table or bracket covers the request
    #[serde(rename = "STANDARDS_NOT_FOUND")]
    StandardsNotFound = 4000,

    // Configuration (6000-6999)
    /// Scoring configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Standards data could not be parsed or failed structural checks
    #[serde(rename = "STANDARDS_INVALID")]
    StandardsInvalid = 9003,
}

impl ErrorCode {
    /// Numeric code for logs and wire formats
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided measurement is invalid",
            Self::MissingPrerequisite => "Age, gender and bodyweight are required before scoring",
            Self::InvalidReps => "Repetition count is outside the supported range",
            Self::StandardsNotFound => "No performance standard covers this exercise and profile",
            Self::ConfigInvalid => "Scoring configuration is invalid",
            Self::StandardsInvalid => "Performance standards data is malformed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Errors produced while scoring an assessment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    /// A demographic field needed for bracket lookup is missing or unusable
    #[error("missing prerequisite: {field} must be provided before scoring")]
    MissingPrerequisite {
        /// The absent profile field
        field: ProfileField,
    },

    /// A measurement cannot be scored
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending measurement
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Repetition count is above the estimator's limit
    #[error("repetitions must be between 1 and {max}, got {reps}")]
    InvalidReps {
        /// Submitted repetition count
        reps: u32,
        /// Largest supported repetition count
        max: u32,
    },

    /// No table or bracket covers the request
    #[error("no standards for {table}: {detail}")]
    StandardsNotFound {
        /// Table identity, e.g. `bench_press/male/bodyweight`
        table: String,
        /// Lookup that failed
        detail: String,
    },

    /// Standards data failed to parse or validate
    #[error("malformed standards data: {0}")]
    InvalidStandards(String),

    /// Scoring configuration failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl AssessmentError {
    /// Create a missing prerequisite error
    #[must_use]
    pub const fn missing_prerequisite(field: ProfileField) -> Self {
        Self::MissingPrerequisite { field }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a standards-not-found error
    #[must_use]
    pub fn standards_not_found(table: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::StandardsNotFound {
            table: table.into(),
            detail: detail.into(),
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingPrerequisite { .. } => ErrorCode::MissingPrerequisite,
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::InvalidReps { .. } => ErrorCode::InvalidReps,
            Self::StandardsNotFound { .. } => ErrorCode::StandardsNotFound,
            Self::InvalidStandards(_) => ErrorCode::StandardsInvalid,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }
}

/// Result type alias for assessment operations
pub type AssessmentResult<T> = Result<T, AssessmentError>;

/// Require a strictly positive, finite measurement.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidInput`] when the value is NaN, infinite,
/// zero or negative.
pub fn require_positive(field: &str, value: f64) -> AssessmentResult<f64> {
    if !value.is_finite() {
        return Err(AssessmentError::invalid_input(field, "value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(AssessmentError::invalid_input(
            field,
            format!("value must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}
