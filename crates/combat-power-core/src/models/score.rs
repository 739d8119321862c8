// ABOUTME: Display tiers and rounding for finished scores
// ABOUTME: Shared by the honor lock, composite calculator and presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use serde::{Deserialize, Serialize};

use crate::constants::{scale, tiers};

/// Round to two decimal places, half away from zero.
///
/// Only display and persistence boundaries round; interpolation and
/// aggregation keep full precision.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    let factor = 10_f64.powi(scale::DISPLAY_DECIMALS);
    (value * factor).round() / factor
}

/// Display tier for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// Below 40
    Potential,
    /// 40 to below 60
    Growth,
    /// 60 to below 80
    Steel,
    /// 80 to below 90
    Elite,
    /// 90 to below 100
    Apex,
    /// 100 and above
    Legend,
}

impl ScoreTier {
    /// Classify a score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= tiers::LEGEND {
            Self::Legend
        } else if score >= tiers::APEX {
            Self::Apex
        } else if score >= tiers::ELITE {
            Self::Elite
        } else if score >= tiers::STEEL {
            Self::Steel
        } else if score >= tiers::GROWTH {
            Self::Growth
        } else {
            Self::Potential
        }
    }
}
