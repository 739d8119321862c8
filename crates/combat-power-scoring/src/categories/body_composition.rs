// ABOUTME: Body composition category scored by the fat-free mass index
// ABOUTME: Height-normalized FFMI, piecewise score with uncapped overflow, and FFMI bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Fat-free mass index.
//!
//! - `fat_free_mass = bodyweight x (1 - body_fat / 100)`
//! - `ffmi = fat_free_mass / height_m^2`, plus `6.0 x (height_m - 1.8)` above 1.8 m
//!
//! Scoring is formula based, not table based: proportional up to the base
//! FFMI (worth 60), linear from base to ceiling (worth 100), then 5 points per
//! unit above the ceiling.

use combat_power_core::errors::{require_positive, AssessmentError, AssessmentResult};
use combat_power_core::models::{CategoryId, DemographicProfile, ExerciseId, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CategoryAggregator, CategoryScore, SubScore};
use crate::config::BodyCompositionConfig;

const CENTIMETRES_PER_METRE: f64 = 100.0;
const MAX_BODY_FAT_PERCENT: f64 = 100.0;

/// Body fat measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionInput {
    /// Body fat percentage, strictly between 0 and 100
    pub body_fat_percent: f64,
}

impl BodyCompositionInput {
    /// Create an input
    #[must_use]
    pub const fn new(body_fat_percent: f64) -> Self {
        Self { body_fat_percent }
    }
}

/// Intermediate FFMI values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FfmiReading {
    /// Lean mass in kilograms
    pub fat_free_mass_kg: f64,
    /// Index before height normalization
    pub raw_ffmi: f64,
    /// Index used for scoring
    pub adjusted_ffmi: f64,
}

/// Descriptive FFMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FfmiClass {
    /// Male below 18, female below 15
    BelowAverage,
    /// Male 18 to 20, female 15 to 17
    Average,
    /// Male 20 to 22, female 17 to 19
    AboveAverage,
    /// Male 22 to 23
    Excellent,
    /// Male 23 to 26, female 19 to 22
    Superior,
    /// Male 26 to 28
    Suspicious,
    /// Male 28 and above, female 22 and above
    HighlyUnlikely,
}

impl FfmiClass {
    /// Classify an adjusted FFMI
    #[must_use]
    pub fn classify(adjusted_ffmi: f64, gender: Gender) -> Self {
        match gender {
            Gender::Male => match adjusted_ffmi {
                x if x < 18.0 => Self::BelowAverage,
                x if x < 20.0 => Self::Average,
                x if x < 22.0 => Self::AboveAverage,
                x if x < 23.0 => Self::Excellent,
                x if x < 26.0 => Self::Superior,
                x if x < 28.0 => Self::Suspicious,
                _ => Self::HighlyUnlikely,
            },
            Gender::Female => match adjusted_ffmi {
                x if x < 15.0 => Self::BelowAverage,
                x if x < 17.0 => Self::Average,
                x if x < 19.0 => Self::AboveAverage,
                x if x < 22.0 => Self::Superior,
                _ => Self::HighlyUnlikely,
            },
        }
    }
}

/// Scores fat-free mass index
#[derive(Debug, Clone, Copy)]
pub struct BodyCompositionAggregator<'a> {
    config: &'a BodyCompositionConfig,
}

impl<'a> BodyCompositionAggregator<'a> {
    /// Create an aggregator
    #[must_use]
    pub const fn new(config: &'a BodyCompositionConfig) -> Self {
        Self { config }
    }

    /// Compute fat-free mass and FFMI for a profile.
    ///
    /// # Errors
    ///
    /// - [`AssessmentError::MissingPrerequisite`] when the profile has no height
    /// - [`AssessmentError::InvalidInput`] when body fat is outside (0, 100)
    pub fn reading(
        &self,
        profile: &DemographicProfile,
        input: &BodyCompositionInput,
    ) -> AssessmentResult<FfmiReading> {
        let height_m = profile.require_height_cm()? / CENTIMETRES_PER_METRE;
        let body_fat = require_positive("body_fat_percent", input.body_fat_percent)?;
        if body_fat >= MAX_BODY_FAT_PERCENT {
            return Err(AssessmentError::invalid_input(
                "body_fat_percent",
                format!("must be below {MAX_BODY_FAT_PERCENT}, got {body_fat}"),
            ));
        }

        let fat_free_mass_kg = profile.bodyweight_kg() * (1.0 - body_fat / 100.0);
        let raw_ffmi = fat_free_mass_kg / (height_m * height_m);
        let adjusted_ffmi = if height_m > self.config.height_reference_m {
            self.config
                .height_adjustment_per_m
                .mul_add(height_m - self.config.height_reference_m, raw_ffmi)
        } else {
            raw_ffmi
        };
        Ok(FfmiReading {
            fat_free_mass_kg,
            raw_ffmi,
            adjusted_ffmi,
        })
    }

    /// Score an adjusted FFMI for a gender
    #[must_use]
    pub fn score(&self, adjusted_ffmi: f64, gender: Gender) -> f64 {
        let (base, ceiling) = self.config.anchors(gender);
        let base_score = self.config.base_score;
        if adjusted_ffmi <= 0.0 {
            0.0
        } else if adjusted_ffmi <= base {
            adjusted_ffmi / base * base_score
        } else if adjusted_ffmi < ceiling {
            (100.0 - base_score).mul_add((adjusted_ffmi - base) / (ceiling - base), base_score)
        } else {
            (adjusted_ffmi - ceiling).mul_add(self.config.overflow_points_per_unit, 100.0)
        }
    }
}

impl CategoryAggregator for BodyCompositionAggregator<'_> {
    type Input = BodyCompositionInput;

    const CATEGORY: CategoryId = CategoryId::BodyComposition;

    fn aggregate(
        &self,
        profile: &DemographicProfile,
        input: &BodyCompositionInput,
    ) -> AssessmentResult<CategoryScore> {
        let reading = self.reading(profile, input)?;
        let score = self.score(reading.adjusted_ffmi, profile.gender());
        debug!(
            ffmi = reading.adjusted_ffmi,
            class = ?FfmiClass::classify(reading.adjusted_ffmi, profile.gender()),
            score,
            "Scored body composition"
        );
        let sub_score = SubScore::new(ExerciseId::FatFreeMassIndex, reading.adjusted_ffmi, score);
        Ok(CategoryScore::averaged(Self::CATEGORY, vec![sub_score]))
    }
}
