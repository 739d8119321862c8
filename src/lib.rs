// ABOUTME: Main library entry point for the Combat Power assessment engine
// ABOUTME: Re-exports the engine façade, scoring types and logging bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![deny(unsafe_code)]

//! # Combat Power
//!
//! Self-assessment scoring for strength, power, cardio, muscle mass and body
//! composition. Raw measurements are normalized against demographic standards
//! into 0-100+ category scores and averaged into a composite "combat power".
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use combat_power::{AssessmentEngine, DemographicProfile, Gender, VerificationState};
//! use combat_power::categories::{LiftAttempt, StrengthInput};
//!
//! # fn main() -> combat_power::AssessmentResult<()> {
//! let engine = AssessmentEngine::with_defaults()?;
//! let profile = DemographicProfile::new(25, Gender::Male, 80.0)?;
//! let input = StrengthInput {
//!     bench_press: Some(LiftAttempt::new(100.0, 5)),
//!     ..StrengthInput::default()
//! };
//! let result = engine.score_strength(&profile, VerificationState::Unverified, &input)?;
//! println!("strength: {} (capped: {})", result.display_score, result.is_capped);
//! # Ok(())
//! # }
//! ```

/// Assessment engine façade
pub mod engine;

/// Structured logging bootstrap for host applications
pub mod logging;

pub use combat_power_core::{constants, errors, models};
pub use combat_power_scoring::{
    bracket, categories, composite, config, honor_lock, interpolation, one_rep_max, standards,
};

pub use combat_power_core::errors::{AssessmentError, AssessmentResult, ErrorCode};
pub use combat_power_core::models::{
    CategoryId, DemographicProfile, ExerciseId, Gender, ProfileInput, ScoreTier,
    VerificationState,
};
pub use combat_power_scoring::{
    CategoryResult, CompositeProfile, HonorLock, LockedScore, ScoringConfig, StandardsRepository,
};
pub use engine::{AssessmentEngine, AssessmentReport, AssessmentRequest};
