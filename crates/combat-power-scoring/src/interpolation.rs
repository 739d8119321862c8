// ABOUTME: Piecewise-linear score interpolation with pluggable floor and overflow rules
// ABOUTME: Shared core for every table-driven sub-score, in either scoring direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Score Interpolation
//!
//! Every table-driven sub-score goes through [`interpolate`]. The bucket's
//! breakpoints `(t_i, s_i)` are walked in ascending score order:
//!
//! - below the lowest threshold the [`FloorRule`] applies
//! - between two thresholds the score is linear: `s_i + (s_j - s_i) x (v - t_i) / (t_j - t_i)`
//! - at or beyond the top threshold the [`OverflowRule`] applies
//!
//! Lower-is-better tables are handled by negating values, so the same core
//! serves sprint times and jump distances. No rule caps at 100; display
//! capping belongs to the honor lock.
//!
//! Rules are continuous at the top threshold: every overflow rule returns
//! the top breakpoint's score when the excess is zero.

use serde::{Deserialize, Serialize};

use crate::config::{CardioConfig, MuscleConfig, PowerConfig, StrengthConfig};
use crate::standards::{Breakpoint, Bucket, Direction};

/// Behaviour below the lowest authored threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorRule {
    /// No partial credit
    Zero,
    /// Partial credit toward the first tier: `lowest_score x value / lowest_threshold`
    /// (inverted ratio for lower-is-better tables)
    Proportional,
}

/// Diminishing returns above a score threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftCap {
    /// Scores above this are damped
    pub threshold: f64,
    /// Fraction of the excess that is kept
    pub damping: f64,
}

impl SoftCap {
    fn apply(self, score: f64) -> f64 {
        if score > self.threshold {
            (score - self.threshold).mul_add(self.damping, self.threshold)
        } else {
            score
        }
    }
}

/// Behaviour at or beyond the top authored threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowRule {
    /// Continue the line from the breakpoint scoring `anchor_score` through
    /// the top breakpoint, optionally damped by a soft cap
    SegmentSlope {
        /// Score of the breakpoint the slope starts from
        anchor_score: f64,
        /// Optional diminishing-returns zone
        soft_cap: Option<SoftCap>,
    },
    /// Add a fixed number of points per unit beyond the top threshold
    LinearBonus {
        /// Points per unit of measurement (cm, s)
        points_per_unit: f64,
    },
}

/// Complete extrapolation policy for one kind of sub-score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    /// Below the lowest threshold
    pub floor: FloorRule,
    /// At or beyond the top threshold
    pub overflow: OverflowRule,
}

impl ScoringRule {
    /// Strength tiers: zero below Beginner, Advanced-to-Elite slope above Elite
    #[must_use]
    pub const fn strength(config: &StrengthConfig) -> Self {
        Self {
            floor: FloorRule::Zero,
            overflow: OverflowRule::SegmentSlope {
                anchor_score: config.overflow_anchor_score,
                soft_cap: None,
            },
        }
    }

    /// Cooper distance: partial credit below the first tier, 60-to-100 slope above
    #[must_use]
    pub const fn cooper(config: &CardioConfig) -> Self {
        Self {
            floor: FloorRule::Proportional,
            overflow: OverflowRule::SegmentSlope {
                anchor_score: config.cooper_overflow_anchor_score,
                soft_cap: None,
            },
        }
    }

    /// Vertical and standing long jump: fixed bonus per centimetre
    #[must_use]
    pub const fn jump(config: &PowerConfig) -> Self {
        Self {
            floor: FloorRule::Zero,
            overflow: OverflowRule::LinearBonus {
                points_per_unit: config.jump_bonus_per_cm,
            },
        }
    }

    /// 100 m sprint: fixed bonus per second saved
    #[must_use]
    pub const fn sprint(config: &PowerConfig) -> Self {
        Self {
            floor: FloorRule::Zero,
            overflow: OverflowRule::LinearBonus {
                points_per_unit: config.sprint_bonus_per_second,
            },
        }
    }

    /// Skeletal muscle mass and percentage: 90-to-100 slope with a soft cap
    #[must_use]
    pub const fn muscle(config: &MuscleConfig) -> Self {
        Self {
            floor: FloorRule::Zero,
            overflow: OverflowRule::SegmentSlope {
                anchor_score: config.overflow_anchor_score,
                soft_cap: Some(SoftCap {
                    threshold: config.soft_cap_threshold,
                    damping: config.soft_cap_damping,
                }),
            },
        }
    }
}

/// Interpolate a raw score for `value` against one bucket.
///
/// Scores are returned at full precision and are never negative for
/// positive inputs.
#[must_use]
pub fn interpolate(value: f64, bucket: &Bucket, direction: Direction, rule: &ScoringRule) -> f64 {
    let breakpoints = bucket.breakpoints();
    let (Some(lowest), Some(top)) = (breakpoints.first(), breakpoints.last()) else {
        return 0.0;
    };

    let oriented = direction.orient(value);
    if oriented < direction.orient(lowest.threshold) {
        return floor_score(value, lowest, direction, rule.floor);
    }

    let top_oriented = direction.orient(top.threshold);
    if oriented >= top_oriented {
        return overflow_score(oriented - top_oriented, breakpoints, direction, rule.overflow);
    }

    for pair in breakpoints.windows(2) {
        let (low, high) = (&pair[0], &pair[1]);
        let (low_t, high_t) = (direction.orient(low.threshold), direction.orient(high.threshold));
        if oriented >= low_t && oriented < high_t {
            let fraction = (oriented - low_t) / (high_t - low_t);
            return (high.score - low.score).mul_add(fraction, low.score);
        }
    }

    // Only reachable with non-monotone thresholds; award the best knot passed
    breakpoints
        .iter()
        .filter(|point| direction.orient(point.threshold) <= oriented)
        .map(|point| point.score)
        .fold(0.0, f64::max)
}

fn floor_score(value: f64, lowest: &Breakpoint, direction: Direction, floor: FloorRule) -> f64 {
    match floor {
        FloorRule::Zero => 0.0,
        FloorRule::Proportional => {
            let ratio = match direction {
                Direction::HigherIsBetter => value / lowest.threshold,
                Direction::LowerIsBetter => lowest.threshold / value,
            };
            if ratio.is_finite() {
                lowest.score * ratio.clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
    }
}

fn overflow_score(
    excess: f64,
    breakpoints: &[Breakpoint],
    direction: Direction,
    overflow: OverflowRule,
) -> f64 {
    let Some(top) = breakpoints.last() else {
        return 0.0;
    };
    match overflow {
        OverflowRule::LinearBonus { points_per_unit } => excess.mul_add(points_per_unit, top.score),
        OverflowRule::SegmentSlope {
            anchor_score,
            soft_cap,
        } => {
            let anchor = breakpoints
                .iter()
                .find(|point| (point.score - anchor_score).abs() < f64::EPSILON)
                .or_else(|| breakpoints.iter().rev().nth(1));
            let slope = anchor.map_or(0.0, |anchor| {
                let span = direction.orient(top.threshold) - direction.orient(anchor.threshold);
                if span > 0.0 {
                    (top.score - anchor.score) / span
                } else {
                    0.0
                }
            });
            let extended = excess.mul_add(slope, top.score);
            soft_cap.map_or(extended, |cap| cap.apply(extended))
        }
    }
}

/// Score a 5 km run time against the benchmark/baseline formula.
///
/// The benchmark time is worth 100 and the baseline time 0, linear between.
/// Faster than the benchmark earns one point per configured number of
/// seconds saved, without bound.
#[must_use]
pub fn five_km_score(total_seconds: f64, config: &CardioConfig) -> f64 {
    let benchmark = config.five_km_benchmark_seconds;
    let baseline = config.five_km_baseline_seconds;
    if total_seconds <= benchmark {
        100.0 + (benchmark - total_seconds) / config.five_km_seconds_per_bonus_point
    } else if total_seconds >= baseline {
        0.0
    } else {
        100.0 * (baseline - total_seconds) / (baseline - benchmark)
    }
}
