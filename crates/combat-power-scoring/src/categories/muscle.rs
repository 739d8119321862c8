// ABOUTME: Muscle mass category aggregator over skeletal muscle mass and percentage
// ABOUTME: Derives SM% from bodyweight and weights the SMM sub-score before averaging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use combat_power_core::errors::{require_positive, AssessmentError, AssessmentResult};
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{score_against_table, CategoryAggregator, CategoryScore, SubScore};
use crate::config::MuscleConfig;
use crate::interpolation::ScoringRule;
use crate::standards::{StandardBasis, StandardsRepository};

/// Body composition scan result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleInput {
    /// Skeletal muscle mass in kilograms
    pub skeletal_muscle_mass_kg: f64,
}

impl MuscleInput {
    /// Create an input
    #[must_use]
    pub const fn new(skeletal_muscle_mass_kg: f64) -> Self {
        Self {
            skeletal_muscle_mass_kg,
        }
    }
}

/// Scores skeletal muscle mass and its share of bodyweight
#[derive(Debug, Clone, Copy)]
pub struct MuscleAggregator<'a> {
    standards: &'a StandardsRepository,
    config: &'a MuscleConfig,
}

impl<'a> MuscleAggregator<'a> {
    /// Create an aggregator over a standards repository
    #[must_use]
    pub const fn new(standards: &'a StandardsRepository, config: &'a MuscleConfig) -> Self {
        Self { standards, config }
    }
}

impl CategoryAggregator for MuscleAggregator<'_> {
    type Input = MuscleInput;

    const CATEGORY: CategoryId = CategoryId::MuscleMass;

    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &MuscleInput,
    ) -> AssessmentResult<CategoryScore> {
        let smm = require_positive(
            ExerciseId::SkeletalMuscleMass.as_str(),
            input.skeletal_muscle_mass_kg,
        )?;
        if smm > profile.bodyweight_kg() {
            return Err(AssessmentError::invalid_input(
                ExerciseId::SkeletalMuscleMass.as_str(),
                format!(
                    "muscle mass {smm} kg exceeds bodyweight {} kg",
                    profile.bodyweight_kg()
                ),
            ));
        }
        let smm_percent = smm / profile.bodyweight_kg() * 100.0;
        let rule = ScoringRule::muscle(self.config);

        let smm_score = score_against_table(
            self.standards,
            ExerciseId::SkeletalMuscleMass,
            StandardBasis::Age,
            profile,
            smm,
            &rule,
        )?;
        let percent_score = score_against_table(
            self.standards,
            ExerciseId::SkeletalMusclePercent,
            StandardBasis::Age,
            profile,
            smm_percent,
            &rule,
        )?;
        debug!(smm, smm_score, smm_percent, percent_score, "Scored muscle mass");

        let sub_scores = vec![
            SubScore {
                weight: self.config.smm_weight,
                ..SubScore::new(ExerciseId::SkeletalMuscleMass, smm, smm_score)
            },
            SubScore::new(ExerciseId::SkeletalMusclePercent, smm_percent, percent_score),
        ];
        Ok(CategoryScore::averaged(Self::CATEGORY, sub_scores))
    }
}
