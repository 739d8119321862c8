// ABOUTME: Criterion benchmarks for the assessment scoring pipeline
// ABOUTME: Measures interpolation, single-category scoring and batch assessment throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Criterion benchmarks for assessment scoring.
//!
//! Ladder recomputation rescans every user's latest submission, so the batch
//! path matters more than any single call.

#![allow(clippy::missing_docs_in_private_items, clippy::expect_used, missing_docs)]

use combat_power::categories::{
    BodyCompositionInput, CardioInput, LiftAttempt, MuscleInput, PowerInput, StrengthInput,
};
use combat_power::config::StrengthConfig;
use combat_power::interpolation::{interpolate, ScoringRule};
use combat_power::standards::{StandardBasis, TableKey};
use combat_power::{
    AssessmentEngine, AssessmentRequest, DemographicProfile, ExerciseId, Gender, ScoringConfig,
    StandardsRepository, VerificationState,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Batch sizes for ladder-style recomputation
const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

fn engine() -> AssessmentEngine {
    let standards = StandardsRepository::builtin().expect("built-in standards");
    AssessmentEngine::new(standards, ScoringConfig::default()).expect("default config")
}

#[allow(clippy::cast_precision_loss)]
fn request(index: usize) -> AssessmentRequest {
    let offset = (index % 40) as f64;
    let gender = if index % 2 == 0 {
        Gender::Male
    } else {
        Gender::Female
    };
    let age = 18 + u32::try_from(index % 40).unwrap_or(0);
    let profile = DemographicProfile::new(age, gender, 55.0 + offset)
        .and_then(|profile| profile.with_height(160.0 + offset / 2.0))
        .expect("valid profile");

    AssessmentRequest {
        strength: Some(StrengthInput {
            bench_press: Some(LiftAttempt::new(40.0 + offset, 5)),
            squat: Some(LiftAttempt::new(60.0 + offset, 5)),
            deadlift: Some(LiftAttempt::new(80.0 + offset, 3)),
            ..StrengthInput::default()
        }),
        power: Some(PowerInput {
            vertical_jump_cm: Some(30.0 + offset / 2.0),
            standing_long_jump_cm: Some(180.0 + offset),
            sprint_100m_seconds: Some(16.0 - offset / 10.0),
        }),
        cardio: Some(CardioInput::cooper(1800.0 + offset * 20.0)),
        muscle: Some(MuscleInput::new(20.0 + offset / 4.0)),
        body_composition: Some(BodyCompositionInput::new(25.0 - offset / 4.0)),
        ..AssessmentRequest::new(profile, VerificationState::from(index % 3 == 0))
    }
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    let standards = StandardsRepository::builtin().expect("built-in standards");
    let table = standards
        .table(TableKey::new(
            ExerciseId::BenchPress,
            Gender::Male,
            StandardBasis::Bodyweight,
        ))
        .expect("bench table");
    let bucket = &table.buckets()[6];
    let rule = ScoringRule::strength(&StrengthConfig::default());

    for value in [50.0, 112.5, 190.0] {
        group.bench_with_input(BenchmarkId::new("bench_press_80kg", value), &value, |b, &value| {
            b.iter(|| interpolate(black_box(value), bucket, table.direction(), &rule));
        });
    }
    group.finish();
}

fn bench_single_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_category");
    let engine = engine();
    let sample = request(7);

    group.bench_function("strength_three_lifts", |b| {
        let input = sample.strength.clone().unwrap_or_default();
        b.iter(|| {
            engine.score_strength(
                black_box(&sample.profile),
                sample.verification,
                black_box(&input),
            )
        });
    });
    group.bench_function("power_three_tests", |b| {
        let input = sample.power.unwrap_or_default();
        b.iter(|| {
            engine.score_power(
                black_box(&sample.profile),
                sample.verification,
                black_box(&input),
            )
        });
    });
    group.finish();
}

fn bench_assessment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assessment");
    let engine = engine();

    let single = request(3);
    group.bench_function("full_request", |b| {
        b.iter(|| engine.assess(black_box(&single)));
    });

    for size in BATCH_SIZES {
        let requests: Vec<AssessmentRequest> = (0..size).map(request).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch", size), &requests, |b, requests| {
            b.iter(|| engine.assess_batch(black_box(requests)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_interpolation,
    bench_single_category,
    bench_assessment,
);
criterion_main!(benches);
