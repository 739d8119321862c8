// ABOUTME: Strength category aggregator over five lifts
// ABOUTME: Estimates 1RM, scores against bodyweight and age standards, averages lifts present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use combat_power_core::errors::{AssessmentError, AssessmentResult};
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{score_against_table, CategoryAggregator, CategoryScore, StandardBreakdown, SubScore};
use crate::config::StrengthConfig;
use crate::interpolation::ScoringRule;
use crate::one_rep_max::estimate_one_rep_max;
use crate::standards::{StandardBasis, StandardsRepository};

/// One submitted set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftAttempt {
    /// Load lifted in kilograms
    pub weight_kg: f64,
    /// Repetitions completed
    pub reps: u32,
}

impl LiftAttempt {
    /// Create an attempt
    #[must_use]
    pub const fn new(weight_kg: f64, reps: u32) -> Self {
        Self { weight_kg, reps }
    }
}

/// Lifts submitted for the strength category; absent lifts are skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthInput {
    /// Barbell bench press
    #[serde(default)]
    pub bench_press: Option<LiftAttempt>,
    /// Barbell back squat
    #[serde(default)]
    pub squat: Option<LiftAttempt>,
    /// Deadlift
    #[serde(default)]
    pub deadlift: Option<LiftAttempt>,
    /// Lat pulldown
    #[serde(default)]
    pub lat_pulldown: Option<LiftAttempt>,
    /// Overhead press
    #[serde(default)]
    pub shoulder_press: Option<LiftAttempt>,
}

impl StrengthInput {
    /// Lifts that were submitted, in canonical order
    pub fn attempts(&self) -> impl Iterator<Item = (ExerciseId, LiftAttempt)> + '_ {
        ExerciseId::STRENGTH_LIFTS
            .into_iter()
            .filter_map(|exercise| self.attempt(exercise).map(|attempt| (exercise, attempt)))
    }

    /// The attempt for one lift, if submitted
    #[must_use]
    pub const fn attempt(&self, exercise: ExerciseId) -> Option<LiftAttempt> {
        match exercise {
            ExerciseId::BenchPress => self.bench_press,
            ExerciseId::Squat => self.squat,
            ExerciseId::Deadlift => self.deadlift,
            ExerciseId::LatPulldown => self.lat_pulldown,
            ExerciseId::ShoulderPress => self.shoulder_press,
            _ => None,
        }
    }
}

/// Scores lifts against bodyweight and age standards
#[derive(Debug, Clone, Copy)]
pub struct StrengthAggregator<'a> {
    standards: &'a StandardsRepository,
    config: &'a StrengthConfig,
}

impl<'a> StrengthAggregator<'a> {
    /// Create an aggregator over a standards repository
    #[must_use]
    pub const fn new(standards: &'a StandardsRepository, config: &'a StrengthConfig) -> Self {
        Self { standards, config }
    }

    /// Score one lift: mean of its bodyweight-standard and age-standard scores.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid weight or reps, or missing standards.
    pub fn score_lift(
        &self,
        profile: &DemographicProfile,
        exercise: ExerciseId,
        attempt: LiftAttempt,
    ) -> AssessmentResult<SubScore> {
        let one_rep_max = estimate_one_rep_max(attempt.weight_kg, attempt.reps, self.config)?;
        let rule = ScoringRule::strength(self.config);

        let bodyweight_score = score_against_table(
            self.standards,
            exercise,
            StandardBasis::Bodyweight,
            profile,
            one_rep_max,
            &rule,
        )?;
        let age_score = score_against_table(
            self.standards,
            exercise,
            StandardBasis::Age,
            profile,
            one_rep_max,
            &rule,
        )?;
        let combined = (bodyweight_score + age_score) / 2.0;

        debug!(
            exercise = %exercise,
            one_rep_max,
            bodyweight_score,
            age_score,
            combined,
            "Scored lift"
        );

        Ok(SubScore {
            breakdown: Some(StandardBreakdown {
                bodyweight_score,
                age_score,
            }),
            ..SubScore::new(exercise, one_rep_max, combined)
        })
    }
}

impl CategoryAggregator for StrengthAggregator<'_> {
    type Input = StrengthInput;

    const CATEGORY: CategoryId = CategoryId::Strength;

    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &StrengthInput,
    ) -> AssessmentResult<CategoryScore> {
        let sub_scores = input
            .attempts()
            .map(|(exercise, attempt)| self.score_lift(profile, exercise, attempt))
            .collect::<AssessmentResult<Vec<_>>>()?;
        if sub_scores.is_empty() {
            return Err(AssessmentError::invalid_input(
                "strength",
                "at least one lift must be submitted",
            ));
        }
        Ok(CategoryScore::averaged(Self::CATEGORY, sub_scores))
    }
}
