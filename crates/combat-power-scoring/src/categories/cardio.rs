// ABOUTME: Cardio category aggregator for the Cooper test or a 5 km run
// ABOUTME: The submission's mode picks exactly one sub-test; modes are never averaged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use combat_power_core::errors::{require_positive, AssessmentError, AssessmentResult};
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{score_against_table, CategoryAggregator, CategoryScore, SubScore};
use crate::config::CardioConfig;
use crate::interpolation::{five_km_score, ScoringRule};
use crate::standards::{StandardBasis, StandardsRepository};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// A single cardio submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CardioInput {
    /// Distance covered in twelve minutes
    Cooper {
        /// Metres run
        distance_m: f64,
    },
    /// Time to run five kilometres
    #[serde(rename = "run_5km")]
    FiveKm {
        /// Finishing time in seconds
        total_seconds: f64,
    },
}

impl CardioInput {
    /// Cooper test distance
    #[must_use]
    pub const fn cooper(distance_m: f64) -> Self {
        Self::Cooper { distance_m }
    }

    /// 5 km time as minutes and seconds
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] when seconds are outside
    /// `0..60` or the total time is not positive.
    pub fn five_km(minutes: u32, seconds: u32) -> AssessmentResult<Self> {
        if seconds >= 60 {
            return Err(AssessmentError::invalid_input(
                "run_5km",
                format!("seconds must be below 60, got {seconds}"),
            ));
        }
        let total_seconds = f64::from(minutes).mul_add(SECONDS_PER_MINUTE, f64::from(seconds));
        Self::five_km_seconds(total_seconds)
    }

    /// 5 km time as total seconds
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] when the time is not positive.
    pub fn five_km_seconds(total_seconds: f64) -> AssessmentResult<Self> {
        let total_seconds = require_positive("run_5km", total_seconds)?;
        Ok(Self::FiveKm { total_seconds })
    }
}

/// Scores the selected cardio sub-test
#[derive(Debug, Clone, Copy)]
pub struct CardioAggregator<'a> {
    standards: &'a StandardsRepository,
    config: &'a CardioConfig,
}

impl<'a> CardioAggregator<'a> {
    /// Create an aggregator over a standards repository
    #[must_use]
    pub const fn new(standards: &'a StandardsRepository, config: &'a CardioConfig) -> Self {
        Self { standards, config }
    }
}

impl CategoryAggregator for CardioAggregator<'_> {
    type Input = CardioInput;

    const CATEGORY: CategoryId = CategoryId::Cardio;

    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &CardioInput,
    ) -> AssessmentResult<CategoryScore> {
        let sub_score = match *input {
            CardioInput::Cooper { distance_m } => {
                let distance = require_positive(ExerciseId::CooperRun.as_str(), distance_m)?;
                let score = score_against_table(
                    self.standards,
                    ExerciseId::CooperRun,
                    StandardBasis::Age,
                    profile,
                    distance,
                    &ScoringRule::cooper(self.config),
                )?;
                SubScore::new(ExerciseId::CooperRun, distance, score)
            }
            CardioInput::FiveKm { total_seconds } => {
                let seconds = require_positive(ExerciseId::Run5km.as_str(), total_seconds)?;
                SubScore::new(ExerciseId::Run5km, seconds, five_km_score(seconds, self.config))
            }
        };

        debug!(
            exercise = %sub_score.exercise,
            value = sub_score.measurement,
            score = sub_score.raw_score,
            "Scored cardio test"
        );
        Ok(CategoryScore::averaged(Self::CATEGORY, vec![sub_score]))
    }
}
