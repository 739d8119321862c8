// ABOUTME: Power category aggregator over jumps and the 100 m sprint
// ABOUTME: Averages whichever of the three sub-scores were measured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use combat_power_core::errors::{require_positive, AssessmentError, AssessmentResult};
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{score_against_table, CategoryAggregator, CategoryScore, SubScore};
use crate::config::PowerConfig;
use crate::interpolation::ScoringRule;
use crate::standards::{StandardBasis, StandardsRepository};

/// Power measurements; at least one is required
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerInput {
    /// Vertical jump height in centimetres
    #[serde(default)]
    pub vertical_jump_cm: Option<f64>,
    /// Standing long jump distance in centimetres
    #[serde(default)]
    pub standing_long_jump_cm: Option<f64>,
    /// 100 m sprint time in seconds
    #[serde(default)]
    pub sprint_100m_seconds: Option<f64>,
}

impl PowerInput {
    fn measurements(&self) -> [(ExerciseId, Option<f64>); 3] {
        [
            (ExerciseId::VerticalJump, self.vertical_jump_cm),
            (ExerciseId::StandingLongJump, self.standing_long_jump_cm),
            (ExerciseId::Sprint100m, self.sprint_100m_seconds),
        ]
    }
}

/// Scores jumps and sprint against age-range standards
#[derive(Debug, Clone, Copy)]
pub struct PowerAggregator<'a> {
    standards: &'a StandardsRepository,
    config: &'a PowerConfig,
}

impl<'a> PowerAggregator<'a> {
    /// Create an aggregator over a standards repository
    #[must_use]
    pub const fn new(standards: &'a StandardsRepository, config: &'a PowerConfig) -> Self {
        Self { standards, config }
    }

    fn rule_for(&self, exercise: ExerciseId) -> ScoringRule {
        if exercise == ExerciseId::Sprint100m {
            ScoringRule::sprint(self.config)
        } else {
            ScoringRule::jump(self.config)
        }
    }
}

impl CategoryAggregator for PowerAggregator<'_> {
    type Input = PowerInput;

    const CATEGORY: CategoryId = CategoryId::Power;

    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &PowerInput,
    ) -> AssessmentResult<CategoryScore> {
        let mut sub_scores = Vec::with_capacity(3);
        for (exercise, measurement) in input.measurements() {
            let Some(value) = measurement else {
                continue;
            };
            let value = require_positive(exercise.as_str(), value)?;
            let score = score_against_table(
                self.standards,
                exercise,
                StandardBasis::Age,
                profile,
                value,
                &self.rule_for(exercise),
            )?;
            debug!(exercise = %exercise, value, score, "Scored power test");
            sub_scores.push(SubScore::new(exercise, value, score));
        }

        if sub_scores.is_empty() {
            return Err(AssessmentError::invalid_input(
                "power",
                "at least one of vertical jump, standing long jump or sprint is required",
            ));
        }
        Ok(CategoryScore::averaged(Self::CATEGORY, sub_scores))
    }
}
