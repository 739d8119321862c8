// ABOUTME: Integration tests for scoring configuration defaults, validation and overrides
// ABOUTME: Environment overrides run serially because they mutate process state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use combat_power::config::{
    BodyCompositionConfig, CardioConfig, ConfigError, HonorLockConfig, MuscleConfig, PowerConfig,
    StrengthConfig,
};
use combat_power::{AssessmentError, ErrorCode, ScoringConfig};
use serial_test::serial;

const OVERRIDE_VARS: [&str; 10] = [
    "COMBAT_POWER_MAX_REPS",
    "COMBAT_POWER_JUMP_BONUS_PER_CM",
    "COMBAT_POWER_SPRINT_BONUS_PER_SECOND",
    "COMBAT_POWER_5KM_BENCHMARK_SECONDS",
    "COMBAT_POWER_5KM_BASELINE_SECONDS",
    "COMBAT_POWER_5KM_SECONDS_PER_BONUS_POINT",
    "COMBAT_POWER_SMM_WEIGHT",
    "COMBAT_POWER_MUSCLE_SOFT_CAP",
    "COMBAT_POWER_MUSCLE_SOFT_CAP_DAMPING",
    "COMBAT_POWER_UNVERIFIED_CAP",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// === Defaults ===

#[test]
fn test_defaults_match_product_constants() {
    let config = ScoringConfig::default();
    assert_eq!(config.strength.max_reps, 12);
    assert!((config.strength.one_rep_max_intercept - 1.0278).abs() < f64::EPSILON);
    assert!((config.strength.one_rep_max_slope - 0.0278).abs() < f64::EPSILON);
    assert!((config.power.jump_bonus_per_cm - 2.0).abs() < f64::EPSILON);
    assert!((config.power.sprint_bonus_per_second - 20.0).abs() < f64::EPSILON);
    assert!((config.cardio.five_km_benchmark_seconds - 1200.0).abs() < f64::EPSILON);
    assert!((config.cardio.five_km_baseline_seconds - 2700.0).abs() < f64::EPSILON);
    assert!((config.muscle.smm_weight - 1.25).abs() < f64::EPSILON);
    assert!((config.body_composition.male_base_ffmi - 18.5).abs() < f64::EPSILON);
    assert!((config.body_composition.female_ceiling_ffmi - 21.0).abs() < f64::EPSILON);
    assert!((config.honor_lock.unverified_cap - 100.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let config: ScoringConfig =
        serde_json::from_str(r#"{"power": {"jump_bonus_per_cm": 3.0}}"#).unwrap();
    assert!((config.power.jump_bonus_per_cm - 3.0).abs() < f64::EPSILON);
    assert!((config.power.sprint_bonus_per_second - 20.0).abs() < f64::EPSILON);
    assert_eq!(config.strength, StrengthConfig::default());
}

// === Validation ===

#[test]
fn test_rejects_zero_max_reps() {
    let config = ScoringConfig {
        strength: StrengthConfig {
            max_reps: 0,
            ..StrengthConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_rejects_reps_that_break_the_estimator() {
    // 1.0278 - 0.0278 x 37 < 0
    let config = ScoringConfig {
        strength: StrengthConfig {
            max_reps: 37,
            ..StrengthConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_rejects_negative_bonus() {
    let config = ScoringConfig {
        power: PowerConfig {
            sprint_bonus_per_second: -1.0,
            ..PowerConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_benchmark_slower_than_baseline() {
    let config = ScoringConfig {
        cardio: CardioConfig {
            five_km_benchmark_seconds: 3000.0,
            ..CardioConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_rejects_soft_cap_below_hundred_and_bad_damping() {
    let low_cap = ScoringConfig {
        muscle: MuscleConfig {
            soft_cap_threshold: 90.0,
            ..MuscleConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(low_cap.validate().is_err());

    let bad_damping = ScoringConfig {
        muscle: MuscleConfig {
            soft_cap_damping: 1.5,
            ..MuscleConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(bad_damping.validate().is_err());
}

#[test]
fn test_rejects_inverted_ffmi_anchors() {
    let config = ScoringConfig {
        body_composition: BodyCompositionConfig {
            female_base_ffmi: 22.0,
            ..BodyCompositionConfig::default()
        },
        ..ScoringConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_rejects_non_positive_cap() {
    let config = ScoringConfig {
        honor_lock: HonorLockConfig {
            unverified_cap: 0.0,
        },
        ..ScoringConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_maps_to_assessment_error() {
    let err: AssessmentError = ConfigError::ValueOutOfRange("muscle.smm_weight must be > 0").into();
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
    assert!(err.to_string().contains("smm_weight"));
}

// === Environment overrides ===

#[test]
#[serial]
fn test_load_without_overrides_is_default() {
    clear_overrides();
    assert_eq!(ScoringConfig::load().unwrap(), ScoringConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("COMBAT_POWER_MAX_REPS", "10");
    env::set_var("COMBAT_POWER_SPRINT_BONUS_PER_SECOND", " 15.5 ");
    env::set_var("COMBAT_POWER_SMM_WEIGHT", "1.0");
    env::set_var("COMBAT_POWER_UNVERIFIED_CAP", "110");

    let config = ScoringConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_eq!(config.strength.max_reps, 10);
    assert!((config.power.sprint_bonus_per_second - 15.5).abs() < f64::EPSILON);
    assert!((config.muscle.smm_weight - 1.0).abs() < f64::EPSILON);
    assert!((config.honor_lock.unverified_cap - 110.0).abs() < f64::EPSILON);
    assert_eq!(config.cardio, CardioConfig::default());
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_overrides();
    env::set_var("COMBAT_POWER_MAX_REPS", "twelve");
    let result = ScoringConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("COMBAT_POWER_5KM_BASELINE_SECONDS", "1000");
    let result = ScoringConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
