// ABOUTME: Honor lock policy capping display scores of unverified users
// ABOUTME: Produces the rounded display score and the capped flag from a raw category score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Honor lock.
//!
//! - `display = verified ? raw : min(raw, cap)`, rounded to two decimals
//! - `is_capped = !verified && raw > cap`
//!
//! The raw score is kept unchanged next to the display score so that a later
//! verification can reveal it without re-scoring.

use combat_power_core::constants::scale;
use combat_power_core::models::{round_to_hundredths, CategoryId, VerificationState};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::categories::{CategoryScore, SubScore};
use crate::config::HonorLockConfig;

/// Display score after the honor lock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockedScore {
    /// Score to display and persist, rounded to two decimals
    pub display_score: f64,
    /// True when the cap lowered the score
    pub is_capped: bool,
}

/// Caps unverified scores for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HonorLock {
    cap: f64,
}

impl Default for HonorLock {
    fn default() -> Self {
        Self {
            cap: scale::UNVERIFIED_CAP,
        }
    }
}

impl HonorLock {
    /// Lock with a custom cap
    #[must_use]
    pub const fn new(cap: f64) -> Self {
        Self { cap }
    }

    /// Lock configured from [`HonorLockConfig`]
    #[must_use]
    pub const fn from_config(config: &HonorLockConfig) -> Self {
        Self::new(config.unverified_cap)
    }

    /// Display cap for unverified users
    #[must_use]
    pub const fn cap(&self) -> f64 {
        self.cap
    }

    /// Apply the lock to a raw score
    #[must_use]
    pub fn apply(&self, raw_score: f64, verification: VerificationState) -> LockedScore {
        if verification.is_verified() {
            return LockedScore {
                display_score: round_to_hundredths(raw_score),
                is_capped: false,
            };
        }
        let is_capped = raw_score > self.cap;
        LockedScore {
            display_score: round_to_hundredths(raw_score.min(self.cap)),
            is_capped,
        }
    }

    /// Turn an aggregated category score into its persisted result
    #[must_use]
    pub fn lock_category(
        &self,
        score: CategoryScore,
        verification: VerificationState,
    ) -> CategoryResult {
        let locked = self.apply(score.raw_score, verification);
        if locked.is_capped {
            warn!(
                category = %score.category,
                raw_score = score.raw_score,
                cap = self.cap,
                "Honor lock capped unverified score"
            );
        }
        CategoryResult {
            category: score.category,
            sub_scores: score.sub_scores,
            raw_category_score: score.raw_score,
            display_score: locked.display_score,
            is_capped: locked.is_capped,
        }
    }
}

/// Finished category result handed to persistence and the composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category scored
    pub category: CategoryId,
    /// Contributing sub-scores at full precision
    pub sub_scores: Vec<SubScore>,
    /// Unrounded, uncapped category score
    pub raw_category_score: f64,
    /// Rounded score after the honor lock
    pub display_score: f64,
    /// True when the honor lock lowered the score
    pub is_capped: bool,
}
