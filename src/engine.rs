// ABOUTME: Assessment engine façade threading profile and verification through every call
// ABOUTME: Runs category aggregators, applies the honor lock and builds the composite profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Assessment Engine
//!
//! Entry point for host applications. The engine owns an immutable standards
//! repository and a validated configuration; the demographic profile and the
//! verification flag are explicit arguments of every call, never ambient
//! state. Every method is a pure computation, so one engine can be shared
//! across threads and [`AssessmentEngine::assess_batch`] scores requests in
//! parallel.

use std::sync::Arc;

use combat_power_core::errors::AssessmentResult;
use combat_power_core::models::{CategoryId, DemographicProfile, VerificationState};
use combat_power_scoring::categories::{
    BodyCompositionAggregator, BodyCompositionInput, CardioAggregator, CardioInput,
    CategoryAggregator, MuscleAggregator, MuscleInput, PowerAggregator, PowerInput,
    StrengthAggregator, StrengthInput,
};
use combat_power_scoring::{
    CategoryResult, CompositeProfile, HonorLock, LockedScore, ScoringConfig, StandardsRepository,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything submitted for one user in one scoring pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Validated demographic profile
    pub profile: DemographicProfile,
    /// Moderation verification flag
    #[serde(default)]
    pub verification: VerificationState,
    /// Strength lifts, if submitted
    #[serde(default)]
    pub strength: Option<StrengthInput>,
    /// Jumps and sprint, if submitted
    #[serde(default)]
    pub power: Option<PowerInput>,
    /// Cooper or 5 km run, if submitted
    #[serde(default)]
    pub cardio: Option<CardioInput>,
    /// Skeletal muscle mass, if submitted
    #[serde(default)]
    pub muscle: Option<MuscleInput>,
    /// Body fat, if submitted
    #[serde(default)]
    pub body_composition: Option<BodyCompositionInput>,
}

impl AssessmentRequest {
    /// Request with no categories submitted yet
    #[must_use]
    pub const fn new(profile: DemographicProfile, verification: VerificationState) -> Self {
        Self {
            profile,
            verification,
            strength: None,
            power: None,
            cardio: None,
            muscle: None,
            body_composition: None,
        }
    }
}

/// Category results of one request and their composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// One result per submitted category
    pub results: Vec<CategoryResult>,
    /// Composite over the submitted categories
    pub composite: CompositeProfile,
}

/// Scoring façade over a standards repository and configuration
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    standards: Arc<StandardsRepository>,
    config: ScoringConfig,
    honor_lock: HonorLock,
}

impl AssessmentEngine {
    /// Create an engine.
    ///
    /// # Errors
    ///
    /// Returns [`combat_power_core::errors::AssessmentError::Config`] if the
    /// configuration fails validation.
    pub fn new(standards: Arc<StandardsRepository>, config: ScoringConfig) -> AssessmentResult<Self> {
        config.validate()?;
        let honor_lock = HonorLock::from_config(&config.honor_lock);
        info!(
            standards_version = %standards.version(),
            tables = standards.len(),
            "Assessment engine ready"
        );
        Ok(Self {
            standards,
            config,
            honor_lock,
        })
    }

    /// Engine over the built-in standards and the process-wide configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in standards fail to load.
    pub fn with_defaults() -> AssessmentResult<Self> {
        Self::new(StandardsRepository::builtin()?, ScoringConfig::global().clone())
    }

    /// Loaded standards
    #[must_use]
    pub fn standards(&self) -> &StandardsRepository {
        &self.standards
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score the strength category.
    ///
    /// # Errors
    ///
    /// Returns an error if no lift is submitted, a lift is invalid, or
    /// standards are missing.
    #[instrument(skip_all, fields(category = "strength", gender = %profile.gender()))]
    pub fn score_strength(
        &self,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &StrengthInput,
    ) -> AssessmentResult<CategoryResult> {
        let aggregator = StrengthAggregator::new(&self.standards, &self.config.strength);
        self.run(&aggregator, profile, verification, input)
    }

    /// Score the power category.
    ///
    /// # Errors
    ///
    /// Returns an error if no measurement is submitted, one is invalid, or
    /// no age bracket covers the profile.
    #[instrument(skip_all, fields(category = "power", gender = %profile.gender()))]
    pub fn score_power(
        &self,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &PowerInput,
    ) -> AssessmentResult<CategoryResult> {
        let aggregator = PowerAggregator::new(&self.standards, &self.config.power);
        self.run(&aggregator, profile, verification, input)
    }

    /// Score the cardio category.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurement is invalid or no age bracket
    /// covers the profile.
    #[instrument(skip_all, fields(category = "cardio", gender = %profile.gender()))]
    pub fn score_cardio(
        &self,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &CardioInput,
    ) -> AssessmentResult<CategoryResult> {
        let aggregator = CardioAggregator::new(&self.standards, &self.config.cardio);
        self.run(&aggregator, profile, verification, input)
    }

    /// Score the muscle mass category.
    ///
    /// # Errors
    ///
    /// Returns an error if the muscle mass is invalid or no age bracket
    /// covers the profile.
    #[instrument(skip_all, fields(category = "muscle_mass", gender = %profile.gender()))]
    pub fn score_muscle(
        &self,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &MuscleInput,
    ) -> AssessmentResult<CategoryResult> {
        let aggregator = MuscleAggregator::new(&self.standards, &self.config.muscle);
        self.run(&aggregator, profile, verification, input)
    }

    /// Score the body composition category.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has no height or body fat is invalid.
    #[instrument(skip_all, fields(category = "body_composition", gender = %profile.gender()))]
    pub fn score_body_composition(
        &self,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &BodyCompositionInput,
    ) -> AssessmentResult<CategoryResult> {
        let aggregator = BodyCompositionAggregator::new(&self.config.body_composition);
        self.run(&aggregator, profile, verification, input)
    }

    fn run<A: CategoryAggregator>(
        &self,
        aggregator: &A,
        profile: &DemographicProfile,
        verification: VerificationState,
        input: &A::Input,
    ) -> AssessmentResult<CategoryResult> {
        let score = aggregator.aggregate(profile, input)?;
        let result = self.honor_lock.lock_category(score, verification);
        info!(
            category = %result.category,
            raw_score = result.raw_category_score,
            display_score = result.display_score,
            is_capped = result.is_capped,
            "Scored category"
        );
        Ok(result)
    }

    /// Apply the honor lock to an arbitrary raw score
    #[must_use]
    pub fn apply_lock(&self, raw_score: f64, verification: VerificationState) -> LockedScore {
        self.honor_lock.apply(raw_score, verification)
    }

    /// Composite over finished category results.
    ///
    /// # Errors
    ///
    /// Returns an error if a display score is negative.
    #[allow(clippy::unused_self)] // Kept on the engine so hosts score and aggregate through one handle
    pub fn composite(&self, results: &[CategoryResult]) -> AssessmentResult<CompositeProfile> {
        CompositeProfile::from_results(results)
    }

    /// Score every submitted category of a request and build the composite.
    ///
    /// The first failing category aborts the request.
    ///
    /// # Errors
    ///
    /// Returns the first category error encountered.
    #[instrument(skip_all, fields(gender = %request.profile.gender(), age = request.profile.age()))]
    pub fn assess(&self, request: &AssessmentRequest) -> AssessmentResult<AssessmentReport> {
        let profile = &request.profile;
        let verification = request.verification;
        let mut results = Vec::with_capacity(CategoryId::ALL.len());

        if let Some(input) = &request.strength {
            results.push(self.score_strength(profile, verification, input)?);
        }
        if let Some(input) = &request.power {
            results.push(self.score_power(profile, verification, input)?);
        }
        if let Some(input) = &request.cardio {
            results.push(self.score_cardio(profile, verification, input)?);
        }
        if let Some(input) = &request.muscle {
            results.push(self.score_muscle(profile, verification, input)?);
        }
        if let Some(input) = &request.body_composition {
            results.push(self.score_body_composition(profile, verification, input)?);
        }

        let composite = self.composite(&results)?;
        info!(
            categories = results.len(),
            composite_score = composite.composite_score(),
            ladder_eligible = composite.is_ladder_eligible(),
            "Assessment complete"
        );
        Ok(AssessmentReport { results, composite })
    }

    /// Score many requests in parallel; results keep the input order
    #[must_use]
    pub fn assess_batch(
        &self,
        requests: &[AssessmentRequest],
    ) -> Vec<AssessmentResult<AssessmentReport>> {
        requests
            .par_iter()
            .map(|request| self.assess(request))
            .collect()
    }
}
