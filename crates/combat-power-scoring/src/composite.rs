// ABOUTME: Composite combat power score over completed categories
// ABOUTME: Mean of display scores present; absent categories are excluded, not zeroed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use std::collections::BTreeMap;

use combat_power_core::errors::{AssessmentError, AssessmentResult};
use combat_power_core::models::{round_to_hundredths, CategoryId, ScoreTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::categories::mean;
use crate::honor_lock::CategoryResult;

/// Display scores per category and their composite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeProfile {
    category_scores: BTreeMap<CategoryId, f64>,
    composite_score: f64,
}

impl CompositeProfile {
    /// Build from finished category results.
    ///
    /// A category appearing more than once keeps its last result.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] if a display score is
    /// negative or not finite.
    pub fn from_results<'a>(
        results: impl IntoIterator<Item = &'a CategoryResult>,
    ) -> AssessmentResult<Self> {
        Self::from_scores(
            results
                .into_iter()
                .map(|result| (result.category, result.display_score)),
        )
    }

    /// Build from persisted display scores.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] if a score is negative or
    /// not finite.
    pub fn from_scores(
        scores: impl IntoIterator<Item = (CategoryId, f64)>,
    ) -> AssessmentResult<Self> {
        let mut category_scores = BTreeMap::new();
        for (category, score) in scores {
            validate_category_score(category, score)?;
            category_scores.insert(category, score);
        }
        Ok(Self::recomputed(category_scores))
    }

    /// Replace one category's display score and recompute.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] if the score is negative or
    /// not finite.
    pub fn with_category(
        mut self,
        category: CategoryId,
        display_score: f64,
    ) -> AssessmentResult<Self> {
        validate_category_score(category, display_score)?;
        self.category_scores.insert(category, display_score);
        Ok(Self::recomputed(self.category_scores))
    }

    /// Drop one category and recompute
    #[must_use]
    pub fn without_category(mut self, category: CategoryId) -> Self {
        self.category_scores.remove(&category);
        Self::recomputed(self.category_scores)
    }

    fn recomputed(category_scores: BTreeMap<CategoryId, f64>) -> Self {
        let composite_score = round_to_hundredths(mean(category_scores.values().copied()));
        debug!(
            categories = category_scores.len(),
            composite_score, "Computed composite score"
        );
        Self {
            category_scores,
            composite_score,
        }
    }

    /// Mean of the present display scores, rounded to two decimals; zero when empty
    #[must_use]
    pub const fn composite_score(&self) -> f64 {
        self.composite_score
    }

    /// Display scores by category
    #[must_use]
    pub const fn category_scores(&self) -> &BTreeMap<CategoryId, f64> {
        &self.category_scores
    }

    /// Display score of one category, if completed
    #[must_use]
    pub fn category_score(&self, category: CategoryId) -> Option<f64> {
        self.category_scores.get(&category).copied()
    }

    /// Number of completed categories
    #[must_use]
    pub fn completed_categories(&self) -> usize {
        self.category_scores.len()
    }

    /// True once every category has a score; ranking policy lives outside the engine
    #[must_use]
    pub fn is_ladder_eligible(&self) -> bool {
        CategoryId::ALL
            .iter()
            .all(|category| self.category_scores.contains_key(category))
    }

    /// Display tier of the composite score
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.composite_score)
    }
}

fn validate_category_score(category: CategoryId, score: f64) -> AssessmentResult<()> {
    if !score.is_finite() || score < 0.0 {
        return Err(AssessmentError::invalid_input(
            category.as_str(),
            format!("category score must be a non-negative number, got {score}"),
        ));
    }
    Ok(())
}
