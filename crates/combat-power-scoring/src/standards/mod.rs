// ABOUTME: Performance standards tables and their repository
// ABOUTME: Re-exports the table model and the validated, versioned repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! # Performance Standards
//!
//! Static, hand-authored reference data. Each table covers one exercise for
//! one gender, bucketed either by bodyweight or by age. A bucket maps score
//! breakpoints (five strength tiers, or points 0 to 100) to the physical
//! value a subject must reach.
//!
//! The JSON asset format:
//!
//! ```json
//! {
//!   "version": "2025.1",
//!   "tables": [{
//!     "exercise": "cooper_run", "gender": "male", "basis": "age",
//!     "direction": "higher_is_better",
//!     "buckets": [{ "key": { "age_range": [20, 29] },
//!                   "thresholds": { "points": { "10": 1000, "100": 2800 } } }]
//!   }]
//! }
//! ```

mod model;
mod repository;

pub use model::{
    Breakpoint, Bucket, BucketKey, Direction, StandardBasis, StandardTable, TableKey,
};
pub use repository::StandardsRepository;
