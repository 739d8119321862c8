// ABOUTME: Estimates a one-repetition maximum from a submaximal set
// ABOUTME: Linear rep-fatigue model valid up to twelve repetitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! One-rep-max estimation.
//!
//! Formula: `1RM = weight / (1.0278 - 0.0278 x reps)`
//!
//! The estimate degrades quickly past twelve repetitions, so larger sets are
//! rejected rather than extrapolated. A single repetition returns (almost)
//! the lifted weight: `1.0278 - 0.0278 = 1.0`.

use combat_power_core::errors::{require_positive, AssessmentError, AssessmentResult};

use crate::config::StrengthConfig;

/// Estimate a one-rep max in the unit of `weight`.
///
/// # Errors
///
/// - [`AssessmentError::InvalidInput`] if `weight` is not a positive finite
///   number or `reps` is zero
/// - [`AssessmentError::InvalidReps`] if `reps` exceeds `config.max_reps`
pub fn estimate_one_rep_max(weight: f64, reps: u32, config: &StrengthConfig) -> AssessmentResult<f64> {
    let weight = require_positive("weight", weight)?;
    if reps == 0 {
        return Err(AssessmentError::invalid_input(
            "reps",
            "at least one repetition is required",
        ));
    }
    if reps > config.max_reps {
        return Err(AssessmentError::InvalidReps {
            reps,
            max: config.max_reps,
        });
    }

    let divisor = config
        .one_rep_max_slope
        .mul_add(-f64::from(reps), config.one_rep_max_intercept);
    if divisor <= 0.0 {
        return Err(AssessmentError::Config(format!(
            "one-rep-max divisor is not positive at {reps} reps"
        )));
    }
    Ok(weight / divisor)
}
