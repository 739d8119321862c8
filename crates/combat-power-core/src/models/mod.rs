// ABOUTME: Core data models for the Combat Power assessment engine
// ABOUTME: Re-exports profile, exercise, category and score tier types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Data Models
//!
//! Vocabulary shared by the scoring crate and the engine façade.
//!
//! ## Core Models
//!
//! - `DemographicProfile`: validated age, gender, bodyweight and optional height
//! - `ProfileInput`: raw, possibly incomplete profile as supplied by a form
//! - `VerificationState`: read-only flag owned by the moderation workflow
//! - `ExerciseId` / `CategoryId`: what was measured and where it scores
//! - `StrengthTier`: named thresholds of strength standards
//! - `ScoreTier`: display tier derived from a score

// Domain modules
mod exercise;
mod profile;
mod score;

// Re-export all public types for convenience
pub use exercise::{CategoryId, ExerciseId, StrengthTier};
pub use profile::{DemographicProfile, Gender, ProfileField, ProfileInput, VerificationState};
pub use score::{round_to_hundredths, ScoreTier};
