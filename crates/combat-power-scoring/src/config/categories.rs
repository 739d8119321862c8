// ABOUTME: Per-category scoring parameters with product defaults
// ABOUTME: Strength, power, cardio, muscle, body composition and honor lock settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Tunable parameters for each assessment category.
//!
//! Defaults come from `combat_power_core::constants`. The asymmetric power
//! bonuses and the skeletal muscle mass weight are kept as named fields so
//! product can retune them without a code change.

use combat_power_core::constants::{body_composition, cardio, muscle, power, scale, strength};
use combat_power_core::models::Gender;
use serde::{Deserialize, Serialize};

/// One-rep-max estimation and strength extrapolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthConfig {
    /// Largest repetition count the estimator accepts
    pub max_reps: u32,
    /// Intercept of the rep-fatigue denominator
    pub one_rep_max_intercept: f64,
    /// Per-rep slope of the rep-fatigue denominator
    pub one_rep_max_slope: f64,
    /// Tier score whose slope to the top tier continues past Elite
    pub overflow_anchor_score: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            max_reps: strength::MAX_REPS,
            one_rep_max_intercept: strength::ONE_REP_MAX_INTERCEPT,
            one_rep_max_slope: strength::ONE_REP_MAX_SLOPE,
            overflow_anchor_score: strength::OVERFLOW_ANCHOR_SCORE,
        }
    }
}

/// Jump and sprint overflow bonuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    /// Points per centimetre beyond the top jump standard
    pub jump_bonus_per_cm: f64,
    /// Points per second under the top sprint standard
    pub sprint_bonus_per_second: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            jump_bonus_per_cm: power::JUMP_BONUS_PER_CM,
            sprint_bonus_per_second: power::SPRINT_BONUS_PER_SECOND,
        }
    }
}

/// Cooper extrapolation and the 5 km time formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardioConfig {
    /// Score whose slope to 100 continues past the top Cooper standard
    pub cooper_overflow_anchor_score: f64,
    /// 5 km time worth exactly 100 points
    pub five_km_benchmark_seconds: f64,
    /// 5 km time at or beyond which the score is zero
    pub five_km_baseline_seconds: f64,
    /// Seconds under the benchmark needed for one bonus point
    pub five_km_seconds_per_bonus_point: f64,
}

impl Default for CardioConfig {
    fn default() -> Self {
        Self {
            cooper_overflow_anchor_score: cardio::COOPER_OVERFLOW_ANCHOR_SCORE,
            five_km_benchmark_seconds: cardio::FIVE_KM_BENCHMARK_SECONDS,
            five_km_baseline_seconds: cardio::FIVE_KM_BASELINE_SECONDS,
            five_km_seconds_per_bonus_point: cardio::FIVE_KM_SECONDS_PER_BONUS_POINT,
        }
    }
}

/// Muscle mass weighting and diminishing returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuscleConfig {
    /// Multiplier applied to the skeletal muscle mass sub-score
    pub smm_weight: f64,
    /// Score whose slope to 100 continues past the top standard
    pub overflow_anchor_score: f64,
    /// Extrapolated scores above this are damped
    pub soft_cap_threshold: f64,
    /// Fraction of the excess over the soft cap that is kept
    pub soft_cap_damping: f64,
}

impl Default for MuscleConfig {
    fn default() -> Self {
        Self {
            smm_weight: muscle::SMM_WEIGHT,
            overflow_anchor_score: muscle::OVERFLOW_ANCHOR_SCORE,
            soft_cap_threshold: muscle::SOFT_CAP_THRESHOLD,
            soft_cap_damping: muscle::SOFT_CAP_DAMPING,
        }
    }
}

/// Fat-free mass index anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyCompositionConfig {
    /// Male FFMI worth the base score
    pub male_base_ffmi: f64,
    /// Male FFMI worth 100 points
    pub male_ceiling_ffmi: f64,
    /// Female FFMI worth the base score
    pub female_base_ffmi: f64,
    /// Female FFMI worth 100 points
    pub female_ceiling_ffmi: f64,
    /// Score at the base FFMI
    pub base_score: f64,
    /// Points per FFMI unit above the ceiling
    pub overflow_points_per_unit: f64,
    /// Height (m) above which FFMI is normalized
    pub height_reference_m: f64,
    /// FFMI added per metre above the reference height
    pub height_adjustment_per_m: f64,
}

impl BodyCompositionConfig {
    /// Base and ceiling FFMI for a gender
    #[must_use]
    pub const fn anchors(&self, gender: Gender) -> (f64, f64) {
        match gender {
            Gender::Male => (self.male_base_ffmi, self.male_ceiling_ffmi),
            Gender::Female => (self.female_base_ffmi, self.female_ceiling_ffmi),
        }
    }
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            male_base_ffmi: body_composition::MALE_BASE_FFMI,
            male_ceiling_ffmi: body_composition::MALE_CEILING_FFMI,
            female_base_ffmi: body_composition::FEMALE_BASE_FFMI,
            female_ceiling_ffmi: body_composition::FEMALE_CEILING_FFMI,
            base_score: body_composition::BASE_SCORE,
            overflow_points_per_unit: body_composition::OVERFLOW_POINTS_PER_UNIT,
            height_reference_m: body_composition::HEIGHT_REFERENCE_M,
            height_adjustment_per_m: body_composition::HEIGHT_ADJUSTMENT_PER_M,
        }
    }
}

/// Display cap for unverified users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HonorLockConfig {
    /// Highest display score an unverified user can hold
    pub unverified_cap: f64,
}

impl Default for HonorLockConfig {
    fn default() -> Self {
        Self {
            unverified_cap: scale::UNVERIFIED_CAP,
        }
    }
}
