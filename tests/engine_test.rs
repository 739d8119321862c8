// ABOUTME: End-to-end tests for the assessment engine façade
// ABOUTME: Full requests, honor lock reveal, batch scoring and request deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use combat_power::categories::{
    BodyCompositionInput, CardioInput, LiftAttempt, MuscleInput, PowerInput, StrengthInput,
};
use combat_power::config::{HonorLockConfig, MuscleConfig};
use combat_power::{
    AssessmentEngine, AssessmentRequest, CategoryId, ErrorCode, ScoreTier, ScoringConfig,
    VerificationState,
};
use common::{assert_close, engine, male_25_80kg, male_25_80kg_180cm};

fn full_request(verification: VerificationState) -> AssessmentRequest {
    AssessmentRequest {
        strength: Some(StrengthInput {
            bench_press: Some(LiftAttempt::new(100.0, 5)),
            ..StrengthInput::default()
        }),
        power: Some(PowerInput {
            vertical_jump_cm: Some(50.0),
            standing_long_jump_cm: Some(220.0),
            sprint_100m_seconds: Some(13.8),
        }),
        cardio: Some(CardioInput::cooper(2880.0)),
        muscle: Some(MuscleInput::new(36.0)),
        body_composition: Some(BodyCompositionInput::new(15.0)),
        ..AssessmentRequest::new(male_25_80kg_180cm(), verification)
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AssessmentEngine>();
}

#[test]
fn test_full_unverified_assessment() {
    let report = engine()
        .assess(&full_request(VerificationState::Unverified))
        .unwrap();

    let categories: Vec<CategoryId> = report.results.iter().map(|r| r.category).collect();
    assert_eq!(categories, CategoryId::ALL.to_vec());

    let display = |category| report.composite.category_score(category).unwrap();
    assert_close(display(CategoryId::Strength), 69.27);
    assert_close(display(CategoryId::Power), 50.0);
    assert_close(display(CategoryId::Cardio), 100.0);
    assert_close(display(CategoryId::MuscleMass), 86.25);
    assert_close(display(CategoryId::BodyComposition), 75.31);

    let cardio = &report.results[2];
    assert!(cardio.is_capped);
    assert_close(cardio.raw_category_score, 104.0);

    assert_close(report.composite.composite_score(), 76.17);
    assert!(report.composite.is_ladder_eligible());
    assert_eq!(report.composite.tier(), ScoreTier::Steel);
}

#[test]
fn test_verification_reveals_raw_score() {
    let report = engine()
        .assess(&full_request(VerificationState::Verified))
        .unwrap();
    let cardio = &report.results[2];
    assert!(!cardio.is_capped);
    assert_close(cardio.display_score, 104.0);
    assert_close(report.composite.composite_score(), 76.97);
}

#[test]
fn test_single_category_calls() {
    let engine = engine();
    let profile = male_25_80kg();

    let strength = engine
        .score_strength(
            &profile,
            VerificationState::Unverified,
            &StrengthInput {
                squat: Some(LiftAttempt::new(150.0, 3)),
                deadlift: Some(LiftAttempt::new(200.0, 2)),
                ..StrengthInput::default()
            },
        )
        .unwrap();
    assert_eq!(strength.category, CategoryId::Strength);
    assert_eq!(strength.sub_scores.len(), 2);
    assert!(!strength.is_capped);

    let cardio = engine
        .score_cardio(
            &profile,
            VerificationState::Unverified,
            &CardioInput::five_km(25, 0).unwrap(),
        )
        .unwrap();
    assert_close(cardio.display_score, 80.0);
}

#[test]
fn test_partial_request_composite_excludes_missing() {
    let request = AssessmentRequest {
        cardio: Some(CardioInput::five_km(20, 0).unwrap()),
        power: Some(PowerInput {
            vertical_jump_cm: Some(50.0),
            ..PowerInput::default()
        }),
        ..AssessmentRequest::new(male_25_80kg(), VerificationState::Unverified)
    };
    let report = engine().assess(&request).unwrap();
    assert_eq!(report.results.len(), 2);
    assert_close(report.composite.composite_score(), 75.0);
    assert!(!report.composite.is_ladder_eligible());
}

#[test]
fn test_empty_request_has_zero_composite() {
    let request = AssessmentRequest::new(male_25_80kg(), VerificationState::Verified);
    let report = engine().assess(&request).unwrap();
    assert!(report.results.is_empty());
    assert!(report.composite.composite_score().abs() < f64::EPSILON);
}

#[test]
fn test_failing_category_aborts_request() {
    // Body composition without a height
    let request = AssessmentRequest {
        body_composition: Some(BodyCompositionInput::new(15.0)),
        ..full_request(VerificationState::Verified)
    };
    let request = AssessmentRequest {
        profile: male_25_80kg(),
        ..request
    };
    let err = engine().assess(&request).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingPrerequisite);
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let engine = engine();
    let failing = AssessmentRequest {
        strength: Some(StrengthInput {
            bench_press: Some(LiftAttempt::new(60.0, 15)),
            ..StrengthInput::default()
        }),
        ..AssessmentRequest::new(male_25_80kg(), VerificationState::Unverified)
    };
    let requests = vec![
        full_request(VerificationState::Unverified),
        failing,
        full_request(VerificationState::Verified),
    ];

    let reports = engine.assess_batch(&requests);
    assert_eq!(reports.len(), 3);
    assert_close(reports[0].as_ref().unwrap().composite.composite_score(), 76.17);
    assert_eq!(
        reports[1].as_ref().unwrap_err().code(),
        ErrorCode::InvalidReps
    );
    assert_close(reports[2].as_ref().unwrap().composite.composite_score(), 76.97);

    for (request, report) in requests.iter().zip(&reports) {
        if let Ok(report) = report {
            assert_eq!(report, &engine.assess(request).unwrap());
        }
    }
}

#[test]
fn test_apply_lock_uses_configured_cap() {
    let config = ScoringConfig {
        honor_lock: HonorLockConfig {
            unverified_cap: 110.0,
        },
        ..ScoringConfig::default()
    };
    let engine = AssessmentEngine::new(common::standards(), config).unwrap();
    let locked = engine.apply_lock(115.0, VerificationState::Unverified);
    assert!(locked.is_capped);
    assert_close(locked.display_score, 110.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ScoringConfig {
        muscle: MuscleConfig {
            smm_weight: 0.0,
            ..MuscleConfig::default()
        },
        ..ScoringConfig::default()
    };
    let err = AssessmentEngine::new(common::standards(), config).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "profile": {"age": 25, "gender": "男性", "bodyweight_kg": 80, "height_cm": 180},
        "verification": "verified",
        "strength": {"bench_press": {"weight_kg": 100, "reps": 5}},
        "cardio": {"mode": "cooper", "distance_m": 2880}
    }"#;
    let request: AssessmentRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.profile, male_25_80kg_180cm());
    assert_eq!(request.verification, VerificationState::Verified);
    assert!(request.power.is_none());

    let report = engine().assess(&request).unwrap();
    assert_close(report.results[1].display_score, 104.0);
}

#[test]
fn test_request_with_invalid_profile_fails_to_parse() {
    let json = r#"{"profile": {"gender": "male", "bodyweight_kg": 80}}"#;
    assert!(serde_json::from_str::<AssessmentRequest>(json).is_err());
}

#[test]
fn test_report_serializes() {
    let report = engine()
        .assess(&full_request(VerificationState::Unverified))
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 5);
    assert_eq!(value["results"][2]["is_capped"], serde_json::json!(true));
    assert!(value["composite"]["category_scores"]["cardio"].is_number());
}

#[test]
fn test_engine_exposes_standards_and_config() {
    let engine = engine();
    assert_eq!(engine.standards().version(), "2025.1");
    assert_eq!(engine.config(), &ScoringConfig::default());
}
