// ABOUTME: In-memory model of performance standards tables
// ABOUTME: Tables keyed by exercise, gender and basis; buckets of score breakpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use std::fmt;

use combat_power_core::models::{ExerciseId, Gender};
use serde::{Deserialize, Serialize};

/// Which demographic dimension buckets a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardBasis {
    /// Buckets keyed by bodyweight, resolved by nearest neighbour
    Bodyweight,
    /// Buckets keyed by age point or age range
    Age,
}

impl StandardBasis {
    /// Snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bodyweight => "bodyweight",
            Self::Age => "age",
        }
    }
}

/// Whether larger measurements score higher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Distances, loads, masses
    #[default]
    HigherIsBetter,
    /// Times
    LowerIsBetter,
}

impl Direction {
    /// Map a measurement onto an axis where larger is always better
    #[must_use]
    pub fn orient(self, value: f64) -> f64 {
        match self {
            Self::HigherIsBetter => value,
            Self::LowerIsBetter => -value,
        }
    }
}

/// Identity of a standards table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableKey {
    /// Measured exercise
    pub exercise: ExerciseId,
    /// Gender the table applies to
    pub gender: Gender,
    /// Bucketing dimension
    pub basis: StandardBasis,
}

impl TableKey {
    /// Create a table key
    #[must_use]
    pub const fn new(exercise: ExerciseId, gender: Gender, basis: StandardBasis) -> Self {
        Self {
            exercise,
            gender,
            basis,
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.exercise, self.gender, self.basis.as_str())
    }
}

/// Demographic key of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKey {
    /// Discrete bodyweight (kg) for nearest-neighbour matching
    Bodyweight(f64),
    /// Discrete age (years) for nearest-neighbour matching
    Age(u32),
    /// Inclusive age range in whole years
    AgeRange(u32, u32),
}

impl BucketKey {
    /// Position of this key on its axis, used for ordering checks
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        match *self {
            Self::Bodyweight(weight) => weight,
            Self::Age(age) | Self::AgeRange(age, _) => f64::from(age),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bodyweight(weight) => write!(f, "{weight} kg"),
            Self::Age(age) => write!(f, "age {age}"),
            Self::AgeRange(min, max) => write!(f, "age {min}-{max}"),
        }
    }
}

/// A physical threshold and the score it is worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Score awarded at exactly this threshold
    pub score: f64,
    /// Physical value (kg, cm, m, s)
    pub threshold: f64,
}

/// Breakpoints for one demographic slice, sorted by ascending score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    key: BucketKey,
    breakpoints: Vec<Breakpoint>,
}

impl Bucket {
    /// Create a bucket; breakpoints are sorted by score
    #[must_use]
    pub fn new(key: BucketKey, mut breakpoints: Vec<Breakpoint>) -> Self {
        breakpoints.sort_by(|a, b| a.score.total_cmp(&b.score));
        Self { key, breakpoints }
    }

    /// Demographic key
    #[must_use]
    pub const fn key(&self) -> BucketKey {
        self.key
    }

    /// Breakpoints in ascending score order
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Threshold awarded the given score, if authored
    #[must_use]
    pub fn threshold_for(&self, score: f64) -> Option<f64> {
        self.breakpoints
            .iter()
            .find(|point| (point.score - score).abs() < f64::EPSILON)
            .map(|point| point.threshold)
    }
}

/// One exercise's standards for one gender and basis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardTable {
    key: TableKey,
    direction: Direction,
    buckets: Vec<Bucket>,
}

impl StandardTable {
    /// Create a table; buckets are sorted by key
    #[must_use]
    pub fn new(key: TableKey, direction: Direction, mut buckets: Vec<Bucket>) -> Self {
        buckets.sort_by(|a, b| a.key.lower_bound().total_cmp(&b.key.lower_bound()));
        Self {
            key,
            direction,
            buckets,
        }
    }

    /// Table identity
    #[must_use]
    pub const fn key(&self) -> TableKey {
        self.key
    }

    /// Scoring direction
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Buckets in ascending key order
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}
