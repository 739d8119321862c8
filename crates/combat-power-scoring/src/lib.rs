// ABOUTME: Assessment scoring algorithms for the Combat Power engine
// ABOUTME: Standards, bracket resolution, 1RM estimation, interpolation, aggregation, honor lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![deny(unsafe_code)]

//! # Combat Power Scoring
//!
//! Turns raw physical measurements into comparable scores. Data flows one way:
//!
//! ```text
//! measurement -> bracket resolver -> (1RM estimator) -> interpolator
//!             -> category aggregator -> honor lock -> composite
//! ```
//!
//! Everything here is synchronous, deterministic and free of shared mutable
//! state. The standards repository is immutable once loaded, so aggregators
//! can run concurrently for any number of users.

/// Demographic bucket selection
pub mod bracket;

/// Category aggregators and sub-score records
pub mod categories;

/// Composite score over completed categories
pub mod composite;

/// Scoring configuration with environment overrides
pub mod config;

/// Display capping for unverified users
pub mod honor_lock;

/// Piecewise-linear interpolation with floor and overflow rules
pub mod interpolation;

/// One-rep-max estimation
pub mod one_rep_max;

/// Performance standards tables and repository
pub mod standards;

pub use categories::{CategoryAggregator, CategoryScore, SubScore};
pub use composite::CompositeProfile;
pub use config::ScoringConfig;
pub use honor_lock::{CategoryResult, HonorLock, LockedScore};
pub use standards::StandardsRepository;
