// ABOUTME: Selects the demographic bucket of a standards table for a profile
// ABOUTME: Range lookup for age ranges, nearest neighbour for age and bodyweight points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Bracket resolution.
//!
//! Age-range tables use a direct range lookup on whole years. Point-keyed
//! tables (bodyweight, or age points in strength tables) pick the key with the
//! smallest absolute distance; on a tie the smaller key wins because buckets
//! are scanned in ascending order and only a strictly closer key replaces the
//! current best.

use combat_power_core::errors::{AssessmentError, AssessmentResult};
use combat_power_core::models::DemographicProfile;
use tracing::debug;

use crate::standards::{Bucket, BucketKey, StandardBasis, StandardTable};

/// Value a profile presents to a table's bucketing dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemographicKey {
    /// Age in whole years
    Age(u32),
    /// Bodyweight in kilograms
    Bodyweight(f64),
}

impl DemographicKey {
    /// Project a profile onto the given basis
    #[must_use]
    pub fn for_basis(basis: StandardBasis, profile: &DemographicProfile) -> Self {
        match basis {
            StandardBasis::Age => Self::Age(profile.age()),
            StandardBasis::Bodyweight => Self::Bodyweight(profile.bodyweight_kg()),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Age(age) => f64::from(age),
            Self::Bodyweight(weight) => weight,
        }
    }
}

/// Resolve the bucket of `table` that applies to `key`.
///
/// # Errors
///
/// Returns [`AssessmentError::StandardsNotFound`] when no age range contains
/// the age, or when the table is empty.
pub fn resolve_bracket(table: &StandardTable, key: DemographicKey) -> AssessmentResult<&Bucket> {
    let target = key.as_f64();
    let mut nearest: Option<(&Bucket, f64)> = None;

    for bucket in table.buckets() {
        match bucket.key() {
            BucketKey::AgeRange(min, max) => {
                if let DemographicKey::Age(age) = key {
                    if (min..=max).contains(&age) {
                        debug!(table = %table.key(), bucket = %bucket.key(), "Resolved age range");
                        return Ok(bucket);
                    }
                }
            }
            BucketKey::Age(_) | BucketKey::Bodyweight(_) => {
                let distance = (bucket.key().lower_bound() - target).abs();
                let closer = match nearest {
                    Some((_, best)) => distance < best,
                    None => true,
                };
                if closer {
                    nearest = Some((bucket, distance));
                }
            }
        }
    }

    nearest.map_or_else(
        || {
            Err(AssessmentError::standards_not_found(
                table.key().to_string(),
                format!("no bucket covers {key:?}"),
            ))
        },
        |(bucket, _)| {
            debug!(table = %table.key(), bucket = %bucket.key(), "Resolved nearest bucket");
            Ok(bucket)
        },
    )
}

/// Resolve the bucket applying to a profile, projecting the profile onto the
/// table's basis.
///
/// # Errors
///
/// See [`resolve_bracket`].
pub fn resolve_for_profile<'a>(
    table: &'a StandardTable,
    profile: &DemographicProfile,
) -> AssessmentResult<&'a Bucket> {
    resolve_bracket(table, DemographicKey::for_basis(table.key().basis, profile))
}
