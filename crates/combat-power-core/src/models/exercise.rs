// ABOUTME: Exercise, category and strength tier identifiers
// ABOUTME: Stable snake_case ids shared with the standards data asset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Assessment categories that contribute to the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    /// Five barbell and machine lifts
    Strength,
    /// Jumps and sprint
    Power,
    /// Cooper test or 5 km run
    Cardio,
    /// Skeletal muscle mass and percentage
    MuscleMass,
    /// Fat-free mass index
    BodyComposition,
}

impl CategoryId {
    /// Every category, in display order
    pub const ALL: [Self; 5] = [
        Self::Strength,
        Self::Power,
        Self::Cardio,
        Self::MuscleMass,
        Self::BodyComposition,
    ];

    /// Snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Cardio => "cardio",
            Self::MuscleMass => "muscle_mass",
            Self::BodyComposition => "body_composition",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Individual measurements that produce a sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseId {
    /// Barbell bench press (kg)
    BenchPress,
    /// Barbell back squat (kg)
    Squat,
    /// Conventional deadlift (kg)
    Deadlift,
    /// Cable lat pulldown (kg)
    LatPulldown,
    /// Standing overhead press (kg)
    ShoulderPress,
    /// Countermovement vertical jump (cm)
    VerticalJump,
    /// Standing long jump (cm)
    StandingLongJump,
    /// 100 m sprint (seconds, lower is better)
    #[serde(rename = "sprint_100m")]
    Sprint100m,
    /// 12-minute Cooper run (metres)
    CooperRun,
    /// 5 km run (seconds, lower is better)
    #[serde(rename = "run_5km")]
    Run5km,
    /// Skeletal muscle mass (kg)
    SkeletalMuscleMass,
    /// Skeletal muscle mass as a share of bodyweight (%)
    SkeletalMusclePercent,
    /// Height-normalized fat-free mass index
    FatFreeMassIndex,
}

impl ExerciseId {
    /// Lifts scored by the strength category
    pub const STRENGTH_LIFTS: [Self; 5] = [
        Self::BenchPress,
        Self::Squat,
        Self::Deadlift,
        Self::LatPulldown,
        Self::ShoulderPress,
    ];

    /// Identifier used in standards data and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BenchPress => "bench_press",
            Self::Squat => "squat",
            Self::Deadlift => "deadlift",
            Self::LatPulldown => "lat_pulldown",
            Self::ShoulderPress => "shoulder_press",
            Self::VerticalJump => "vertical_jump",
            Self::StandingLongJump => "standing_long_jump",
            Self::Sprint100m => "sprint_100m",
            Self::CooperRun => "cooper_run",
            Self::Run5km => "run_5km",
            Self::SkeletalMuscleMass => "skeletal_muscle_mass",
            Self::SkeletalMusclePercent => "skeletal_muscle_percent",
            Self::FatFreeMassIndex => "fat_free_mass_index",
        }
    }

    /// Category this measurement contributes to
    #[must_use]
    pub const fn category(self) -> CategoryId {
        match self {
            Self::BenchPress
            | Self::Squat
            | Self::Deadlift
            | Self::LatPulldown
            | Self::ShoulderPress => CategoryId::Strength,
            Self::VerticalJump | Self::StandingLongJump | Self::Sprint100m => CategoryId::Power,
            Self::CooperRun | Self::Run5km => CategoryId::Cardio,
            Self::SkeletalMuscleMass | Self::SkeletalMusclePercent => CategoryId::MuscleMass,
            Self::FatFreeMassIndex => CategoryId::BodyComposition,
        }
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named thresholds of a strength standard.
///
/// Each tier is worth a fixed score; the tier below Beginner is the
/// origin at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    /// 20 points
    Beginner,
    /// 40 points
    Novice,
    /// 60 points
    Intermediate,
    /// 80 points
    Advanced,
    /// 100 points
    Elite,
}

impl StrengthTier {
    /// Every tier in ascending order
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// Score awarded for reaching this tier exactly
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Beginner => 20.0,
            Self::Novice => 40.0,
            Self::Intermediate => 60.0,
            Self::Advanced => 80.0,
            Self::Elite => 100.0,
        }
    }
}
