// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, reference profiles and the built-in standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `combat_power`

use std::env;
use std::sync::{Arc, Once};

use combat_power::{
    AssessmentEngine, DemographicProfile, Gender, ScoringConfig, StandardsRepository,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Scores are compared at this tolerance unless a test needs exact equality
pub const TOLERANCE: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two scores agree within [`TOLERANCE`]
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Built-in standards shared by every test
pub fn standards() -> Arc<StandardsRepository> {
    init_test_logging();
    StandardsRepository::builtin().expect("built-in standards must load")
}

/// Engine over the built-in standards and default configuration
pub fn engine() -> AssessmentEngine {
    AssessmentEngine::new(standards(), ScoringConfig::default()).expect("default config is valid")
}

/// Male, 25 years, 80 kg
pub fn male_25_80kg() -> DemographicProfile {
    DemographicProfile::new(25, Gender::Male, 80.0).unwrap()
}

/// Female, 22 years, 60 kg
pub fn female_22_60kg() -> DemographicProfile {
    DemographicProfile::new(22, Gender::Female, 60.0).unwrap()
}

/// Male, 25 years, 80 kg, 180 cm
pub fn male_25_80kg_180cm() -> DemographicProfile {
    male_25_80kg().with_height(180.0).unwrap()
}

/// Linear map from tier position to score between two knots
pub fn lerp(low_score: f64, high_score: f64, low_t: f64, high_t: f64, value: f64) -> f64 {
    low_score + (high_score - low_score) * (value - low_t) / (high_t - low_t)
}

/// One-rep max with the default estimator coefficients
pub fn one_rep_max(weight: f64, reps: u32) -> f64 {
    weight / (1.0278 - 0.0278 * f64::from(reps))
}
