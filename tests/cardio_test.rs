// ABOUTME: Integration tests for the cardio aggregator and its two modes
// ABOUTME: Cooper distances against age tables, 5 km times against the formula, input parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use combat_power::categories::{CardioAggregator, CardioInput, CategoryAggregator};
use combat_power::config::CardioConfig;
use combat_power::models::round_to_hundredths;
use combat_power::{DemographicProfile, ErrorCode, ExerciseId, Gender};
use common::{assert_close, female_22_60kg, male_25_80kg};

fn raw_score(profile: &DemographicProfile, input: CardioInput) -> f64 {
    let standards = common::standards();
    let config = CardioConfig::default();
    CardioAggregator::new(&standards, &config)
        .aggregate(profile, &input)
        .unwrap()
        .raw_score
}

#[test]
fn test_cooper_at_sixty_threshold_scores_exactly_sixty() {
    // Female 21-29: score 60 at 1800 m
    let score = raw_score(&female_22_60kg(), CardioInput::cooper(1800.0));
    assert!((score - 60.0).abs() < f64::EPSILON);
    assert!((round_to_hundredths(score) - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_cooper_beyond_top_threshold_extends_slope() {
    // Male 21-29: t60 = 2000 m, t100 = 2800 m
    let score = raw_score(&male_25_80kg(), CardioInput::cooper(2880.0));
    assert_close(score, 104.0);
}

#[test]
fn test_cooper_below_first_tier_gets_partial_credit() {
    // Female 21-29: score 10 at 675 m
    let score = raw_score(&female_22_60kg(), CardioInput::cooper(337.5));
    assert_close(score, 5.0);
}

#[test]
fn test_cooper_interior() {
    let score = raw_score(&male_25_80kg(), CardioInput::cooper(2300.0));
    assert_close(score, 75.0);
}

#[test]
fn test_cooper_age_twenty_uses_junior_bracket() {
    // Male 17-20: t60 = 2300 m; male 21-29: t60 = 2000 m
    for (age, expected) in [(19, 60.0), (20, 60.0), (21, 75.0)] {
        let profile = DemographicProfile::new(age, Gender::Male, 80.0).unwrap();
        let score = raw_score(&profile, CardioInput::cooper(2300.0));
        assert_close(score, expected);
    }
}

#[test]
fn test_five_km_from_minutes_and_seconds() {
    let profile = male_25_80kg();
    assert_close(raw_score(&profile, CardioInput::five_km(20, 0).unwrap()), 100.0);
    assert_close(raw_score(&profile, CardioInput::five_km(25, 0).unwrap()), 80.0);
    assert_close(raw_score(&profile, CardioInput::five_km(18, 20).unwrap()), 110.0);
    assert_close(raw_score(&profile, CardioInput::five_km(50, 0).unwrap()), 0.0);
}

#[test]
fn test_five_km_ignores_demographics() {
    let input = CardioInput::five_km_seconds(1650.0).unwrap();
    let elder = DemographicProfile::new(75, Gender::Female, 55.0).unwrap();
    assert_close(raw_score(&elder, input), raw_score(&male_25_80kg(), input));
}

#[test]
fn test_five_km_seconds_must_be_below_sixty() {
    let err = CardioInput::five_km(22, 60).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert!(CardioInput::five_km(0, 0).is_err());
    assert!(CardioInput::five_km_seconds(-1.0).is_err());
}

#[test]
fn test_invalid_cooper_distance() {
    let standards = common::standards();
    let config = CardioConfig::default();
    let aggregator = CardioAggregator::new(&standards, &config);
    for distance in [0.0, -100.0, f64::INFINITY] {
        let err = aggregator
            .aggregate(&male_25_80kg(), &CardioInput::cooper(distance))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput, "{distance}");
    }
}

#[test]
fn test_cooper_without_age_bracket() {
    let standards = common::standards();
    let config = CardioConfig::default();
    let child = DemographicProfile::new(11, Gender::Female, 35.0).unwrap();
    let err = CardioAggregator::new(&standards, &config)
        .aggregate(&child, &CardioInput::cooper(1500.0))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::StandardsNotFound);
}

#[test]
fn test_single_sub_score_per_mode() {
    let standards = common::standards();
    let config = CardioConfig::default();
    let aggregator = CardioAggregator::new(&standards, &config);

    let cooper = aggregator
        .aggregate(&male_25_80kg(), &CardioInput::cooper(2400.0))
        .unwrap();
    assert_eq!(cooper.sub_scores.len(), 1);
    assert_eq!(cooper.sub_scores[0].exercise, ExerciseId::CooperRun);

    let run = aggregator
        .aggregate(&male_25_80kg(), &CardioInput::five_km(21, 30).unwrap())
        .unwrap();
    assert_eq!(run.sub_scores.len(), 1);
    assert_eq!(run.sub_scores[0].exercise, ExerciseId::Run5km);
    assert_close(run.sub_scores[0].measurement, 1290.0);
}

#[test]
fn test_cardio_input_json_is_tagged_by_mode() {
    let cooper: CardioInput =
        serde_json::from_str(r#"{"mode":"cooper","distance_m":2400}"#).unwrap();
    assert_eq!(cooper, CardioInput::cooper(2400.0));

    let run: CardioInput =
        serde_json::from_str(r#"{"mode":"run_5km","total_seconds":1500}"#).unwrap();
    assert_eq!(run, CardioInput::five_km(25, 0).unwrap());

    assert!(serde_json::from_str::<CardioInput>(r#"{"mode":"swim","distance_m":400}"#).is_err());
}
