// ABOUTME: Category aggregators combining interpolated sub-scores into category scores
// ABOUTME: Defines the aggregator trait, sub-score records and the shared table lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Category Aggregators
//!
//! One aggregator per assessment category. Each takes a validated profile and
//! the category's raw measurements and returns a [`CategoryScore`] holding
//! the per-measurement sub-scores and the unrounded raw category score. The
//! honor lock turns that into a display score afterwards.
//!
//! | Category | Combination |
//! |---|---|
//! | Strength | per lift: mean(bodyweight score, age score); then mean over lifts present |
//! | Power | mean over the jump/sprint scores present |
//! | Cardio | the single Cooper or 5 km score |
//! | Muscle mass | mean(weighted SMM score, SM% score) |
//! | Body composition | FFMI formula score |

/// Fat-free mass index scoring
pub mod body_composition;
/// Cooper test or 5 km run
pub mod cardio;
/// Skeletal muscle mass and percentage
pub mod muscle;
/// Jumps and sprint
pub mod power;
/// Five lifts with one-rep-max estimation
pub mod strength;

pub use body_composition::{BodyCompositionAggregator, BodyCompositionInput, FfmiClass, FfmiReading};
pub use cardio::{CardioAggregator, CardioInput};
pub use muscle::{MuscleAggregator, MuscleInput};
pub use power::{PowerAggregator, PowerInput};
pub use strength::{LiftAttempt, StrengthAggregator, StrengthInput};

use combat_power_core::errors::AssessmentResult;
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId};
use serde::{Deserialize, Serialize};

use crate::bracket::resolve_for_profile;
use crate::interpolation::{interpolate, ScoringRule};
use crate::standards::{StandardBasis, StandardsRepository, TableKey};

/// Score of a single measurement within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    /// What was measured
    pub exercise: ExerciseId,
    /// Value that was scored (estimated 1RM for lifts, adjusted FFMI for body composition)
    pub measurement: f64,
    /// Unrounded score of the measurement
    pub raw_score: f64,
    /// Multiplier applied before combining (1.0 unless the category weights it)
    pub weight: f64,
    /// Bodyweight-standard and age-standard scores, for lifts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<StandardBreakdown>,
}

impl SubScore {
    /// Unweighted sub-score
    #[must_use]
    pub const fn new(exercise: ExerciseId, measurement: f64, raw_score: f64) -> Self {
        Self {
            exercise,
            measurement,
            raw_score,
            weight: 1.0,
            breakdown: None,
        }
    }

    /// Score after the category weight
    #[must_use]
    pub fn weighted_score(&self) -> f64 {
        self.raw_score * self.weight
    }
}

/// The two standards a lift is judged against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardBreakdown {
    /// Score against the nearest bodyweight bucket
    pub bodyweight_score: f64,
    /// Score against the nearest age bucket
    pub age_score: f64,
}

/// Aggregated, unrounded result of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category scored
    pub category: CategoryId,
    /// Contributing sub-scores
    pub sub_scores: Vec<SubScore>,
    /// Combined raw score, possibly above 100
    pub raw_score: f64,
}

impl CategoryScore {
    /// Combine sub-scores by the mean of their weighted scores.
    ///
    /// Returns a zero raw score for an empty list; callers reject empty
    /// input before getting here.
    #[must_use]
    pub fn averaged(category: CategoryId, sub_scores: Vec<SubScore>) -> Self {
        let raw_score = mean(sub_scores.iter().map(SubScore::weighted_score));
        Self {
            category,
            sub_scores,
            raw_score,
        }
    }
}

/// A category-specific combination of sub-scores
pub trait CategoryAggregator {
    /// Raw measurements the category consumes
    type Input;

    /// Category this aggregator produces
    const CATEGORY: CategoryId;

    /// Score the measurements for a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if a measurement is invalid, the profile lacks a
    /// prerequisite, or no standards cover the profile.
    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &Self::Input,
    ) -> AssessmentResult<CategoryScore>;
}

/// Look up the table for an exercise, resolve the profile's bucket and
/// interpolate the value
pub(crate) fn score_against_table(
    standards: &StandardsRepository,
    exercise: ExerciseId,
    basis: StandardBasis,
    profile: &DemographicProfile,
    value: f64,
    rule: &ScoringRule,
) -> AssessmentResult<f64> {
    let table = standards.table(TableKey::new(exercise, profile.gender(), basis))?;
    let bucket = resolve_for_profile(table, profile)?;
    Ok(interpolate(value, bucket, table.direction(), rule))
}

/// Arithmetic mean, zero for an empty sequence
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
