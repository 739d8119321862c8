// ABOUTME: Core types and constants for the Combat Power assessment engine
// ABOUTME: Foundation crate with error handling, demographic models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

#![deny(unsafe_code)]

//! # Combat Power Core
//!
//! Foundation crate providing shared types and constants for the Combat Power
//! assessment engine. This crate is designed to change infrequently so the
//! scoring crate and the engine façade can build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AssessmentError` and `ErrorCode`
//! - **constants**: Scoring constants organized by category
//! - **models**: Demographic profile, exercise identifiers, categories, and score tiers

/// Unified error handling with standard error codes
pub mod errors;

/// Scoring constants organized by category
pub mod constants;

/// Core data models (profile, exercises, categories, score tiers)
pub mod models;
