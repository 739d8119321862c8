// ABOUTME: Scoring constants organized by assessment category
// ABOUTME: Default values for formulas, bonuses and caps used by ScoringConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Constants module
//!
//! Pure data constants grouped by category. Runtime-tunable values are
//! surfaced through `ScoringConfig` in the scoring crate, which uses these
//! as its defaults.

/// Score scale anchors shared by every category
pub mod scale {
    /// Score of an input exactly at the top of a standards table
    pub const TABLE_MAXIMUM: f64 = 100.0;
    /// Lowest possible score
    pub const FLOOR: f64 = 0.0;
    /// Maximum display score for unverified results
    pub const UNVERIFIED_CAP: f64 = 100.0;
    /// Display scores are rounded to this many decimal places
    pub const DISPLAY_DECIMALS: i32 = 2;
}

/// One-rep-max estimation and strength extrapolation
pub mod strength {
    /// Intercept of the linear rep-fatigue model
    pub const ONE_REP_MAX_INTERCEPT: f64 = 1.0278;
    /// Per-rep slope of the linear rep-fatigue model
    pub const ONE_REP_MAX_SLOPE: f64 = 0.0278;
    /// Largest repetition count accepted by the estimator
    pub const MAX_REPS: u32 = 12;
    /// Above the elite tier, extrapolate along the advanced-to-elite slope
    pub const OVERFLOW_ANCHOR_SCORE: f64 = 80.0;
}

/// Jumps and sprint
pub mod power {
    /// Points per centimetre beyond the top standard for both jumps
    pub const JUMP_BONUS_PER_CM: f64 = 2.0;
    /// Points per second faster than the top 100 m standard
    pub const SPRINT_BONUS_PER_SECOND: f64 = 20.0;
}

/// Cooper test and 5 km run
pub mod cardio {
    /// Above the top Cooper standard, extrapolate along the 60-to-100 slope
    pub const COOPER_OVERFLOW_ANCHOR_SCORE: f64 = 60.0;
    /// 5 km time (seconds) worth exactly 100 points
    pub const FIVE_KM_BENCHMARK_SECONDS: f64 = 1200.0;
    /// 5 km time (seconds) at or beyond which the score is zero
    pub const FIVE_KM_BASELINE_SECONDS: f64 = 2700.0;
    /// Seconds under the benchmark needed for one bonus point
    pub const FIVE_KM_SECONDS_PER_BONUS_POINT: f64 = 10.0;
}

/// Skeletal muscle mass and percentage
pub mod muscle {
    /// Weight given to the absolute skeletal muscle mass sub-score
    pub const SMM_WEIGHT: f64 = 1.25;
    /// Above the top standard, extrapolate along the 90-to-100 slope
    pub const OVERFLOW_ANCHOR_SCORE: f64 = 90.0;
    /// Extrapolated scores above this value are damped
    pub const SOFT_CAP_THRESHOLD: f64 = 120.0;
    /// Fraction of the excess over the soft cap that is kept
    pub const SOFT_CAP_DAMPING: f64 = 0.5;
}

/// Fat-free mass index scoring
pub mod body_composition {
    /// Male FFMI worth the base score
    pub const MALE_BASE_FFMI: f64 = 18.5;
    /// Male FFMI worth 100 points
    pub const MALE_CEILING_FFMI: f64 = 25.0;
    /// Female FFMI worth the base score
    pub const FEMALE_BASE_FFMI: f64 = 15.5;
    /// Female FFMI worth 100 points
    pub const FEMALE_CEILING_FFMI: f64 = 21.0;
    /// Score awarded at the base FFMI
    pub const BASE_SCORE: f64 = 60.0;
    /// Points per FFMI unit above the ceiling
    pub const OVERFLOW_POINTS_PER_UNIT: f64 = 5.0;
    /// Height (metres) above which the FFMI is height-normalized
    pub const HEIGHT_REFERENCE_M: f64 = 1.8;
    /// FFMI adjustment per metre above the reference height
    pub const HEIGHT_ADJUSTMENT_PER_M: f64 = 6.0;
}

/// Score tier boundaries
pub mod tiers {
    /// Lower bound of the Legend tier
    pub const LEGEND: f64 = 100.0;
    /// Lower bound of the Apex tier
    pub const APEX: f64 = 90.0;
    /// Lower bound of the Elite tier
    pub const ELITE: f64 = 80.0;
    /// Lower bound of the Steel tier
    pub const STEEL: f64 = 60.0;
    /// Lower bound of the Growth tier
    pub const GROWTH: f64 = 40.0;
}
