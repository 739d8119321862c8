// ABOUTME: Loads, validates and serves the versioned performance standards asset
// ABOUTME: Built-in tables are embedded at compile time and parsed once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use combat_power_core::errors::{AssessmentError, AssessmentResult};
use combat_power_core::models::{ExerciseId, Gender, StrengthTier};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::model::{
    Breakpoint, Bucket, BucketKey, Direction, StandardBasis, StandardTable, TableKey,
};

/// Standards asset shipped with the crate
const BUILTIN_STANDARDS_JSON: &str = include_str!("../../data/standards.json");

/// Score every table must reach at its top breakpoint
const TOP_SCORE: f64 = 100.0;

static BUILTIN_STANDARDS: OnceLock<AssessmentResult<Arc<StandardsRepository>>> = OnceLock::new();

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StandardsDocument {
    version: String,
    tables: Vec<TableDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDocument {
    exercise: ExerciseId,
    gender: Gender,
    basis: StandardBasis,
    #[serde(default)]
    direction: Direction,
    buckets: Vec<BucketDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BucketDocument {
    key: BucketKey,
    thresholds: ThresholdDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ThresholdDocument {
    /// Five named strength tiers
    Tiers(BTreeMap<StrengthTier, f64>),
    /// Score points (0, 10, ..., 100) mapped to thresholds
    Points(BTreeMap<u32, f64>),
}

impl ThresholdDocument {
    fn into_breakpoints(self, table: TableKey) -> AssessmentResult<Vec<Breakpoint>> {
        let breakpoints: Vec<Breakpoint> = match self {
            Self::Tiers(tiers) => {
                if let Some(missing) = StrengthTier::ALL
                    .iter()
                    .find(|tier| !tiers.contains_key(*tier))
                {
                    return Err(AssessmentError::InvalidStandards(format!(
                        "{table}: tier table is missing {missing:?}"
                    )));
                }
                tiers
                    .into_iter()
                    .map(|(tier, threshold)| Breakpoint {
                        score: tier.score(),
                        threshold,
                    })
                    .collect()
            }
            Self::Points(points) => points
                .into_iter()
                .map(|(score, threshold)| Breakpoint {
                    score: f64::from(score),
                    threshold,
                })
                .collect(),
        };

        if breakpoints.len() < 2 {
            return Err(AssessmentError::InvalidStandards(format!(
                "{table}: a bucket needs at least two breakpoints"
            )));
        }
        if let Some(bad) = breakpoints.iter().find(|p| !p.threshold.is_finite()) {
            return Err(AssessmentError::InvalidStandards(format!(
                "{table}: threshold for score {} is not finite",
                bad.score
            )));
        }
        let top = breakpoints.iter().map(|p| p.score).fold(f64::MIN, f64::max);
        if (top - TOP_SCORE).abs() > f64::EPSILON {
            return Err(AssessmentError::InvalidStandards(format!(
                "{table}: highest breakpoint must score {TOP_SCORE}, found {top}"
            )));
        }
        Ok(breakpoints)
    }
}

/// Immutable collection of standards tables.
///
/// Tables are keyed by (exercise, gender, basis). The repository is loaded
/// once and shared read-only; lookups never allocate.
#[derive(Debug, Clone)]
pub struct StandardsRepository {
    version: String,
    tables: HashMap<TableKey, StandardTable>,
}

impl StandardsRepository {
    /// The standards asset embedded in this crate, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidStandards`] if the embedded asset
    /// fails validation.
    pub fn builtin() -> AssessmentResult<Arc<Self>> {
        BUILTIN_STANDARDS
            .get_or_init(|| Self::from_json(BUILTIN_STANDARDS_JSON).map(Arc::new))
            .clone()
    }

    /// Parse and validate a standards document.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidStandards`] when the JSON does not
    /// match the schema or fails structural validation.
    pub fn from_json(json: &str) -> AssessmentResult<Self> {
        let document: StandardsDocument = serde_json::from_str(json)
            .map_err(|e| AssessmentError::InvalidStandards(format!("parse error: {e}")))?;
        Self::from_document(document)
    }

    /// Read, parse and validate a standards document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidStandards`] when the file cannot be
    /// read or its content is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> AssessmentResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AssessmentError::InvalidStandards(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    fn from_document(document: StandardsDocument) -> AssessmentResult<Self> {
        if document.version.trim().is_empty() {
            return Err(AssessmentError::InvalidStandards(
                "standards version must not be empty".into(),
            ));
        }

        let mut tables = HashMap::with_capacity(document.tables.len());
        for table_document in document.tables {
            let table = build_table(table_document)?;
            let key = table.key();
            if tables.insert(key, table).is_some() {
                return Err(AssessmentError::InvalidStandards(format!(
                    "duplicate table {key}"
                )));
            }
        }

        info!(
            version = %document.version,
            tables = tables.len(),
            "Loaded performance standards"
        );
        Ok(Self {
            version: document.version,
            tables,
        })
    }

    /// Version label of the loaded asset
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no tables are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over every table in no particular order
    pub fn tables(&self) -> impl Iterator<Item = &StandardTable> {
        self.tables.values()
    }

    /// Look up a table.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::StandardsNotFound`] when the asset has no
    /// table for the key.
    pub fn table(&self, key: TableKey) -> AssessmentResult<&StandardTable> {
        self.tables
            .get(&key)
            .ok_or_else(|| AssessmentError::standards_not_found(key.to_string(), "no such table"))
    }
}

fn build_table(document: TableDocument) -> AssessmentResult<StandardTable> {
    let key = TableKey::new(document.exercise, document.gender, document.basis);
    if document.buckets.is_empty() {
        return Err(AssessmentError::InvalidStandards(format!(
            "{key}: table has no buckets"
        )));
    }

    let mut buckets = Vec::with_capacity(document.buckets.len());
    for bucket in document.buckets {
        check_key_kind(key, bucket.key)?;
        let breakpoints = bucket.thresholds.into_breakpoints(key)?;
        buckets.push(Bucket::new(bucket.key, breakpoints));
    }

    let table = StandardTable::new(key, document.direction, buckets);
    check_bucket_layout(&table)?;
    warn_on_non_monotone(&table);
    debug!(table = %key, buckets = table.buckets().len(), "Validated standards table");
    Ok(table)
}

fn check_key_kind(table: TableKey, key: BucketKey) -> AssessmentResult<()> {
    let valid = match (table.basis, key) {
        (StandardBasis::Bodyweight, BucketKey::Bodyweight(weight)) => {
            weight.is_finite() && weight > 0.0
        }
        (StandardBasis::Age, BucketKey::Age(_)) => true,
        (StandardBasis::Age, BucketKey::AgeRange(min, max)) => min <= max,
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(AssessmentError::InvalidStandards(format!(
            "{table}: bucket key {key} does not fit a {} table",
            table.basis.as_str()
        )))
    }
}

/// Keys must be homogeneous, distinct, and ranges must not overlap
fn check_bucket_layout(table: &StandardTable) -> AssessmentResult<()> {
    for pair in table.buckets().windows(2) {
        let (previous, next) = (pair[0].key(), pair[1].key());
        let ordered = match (previous, next) {
            (BucketKey::Bodyweight(a), BucketKey::Bodyweight(b)) => a < b,
            (BucketKey::Age(a), BucketKey::Age(b)) => a < b,
            (BucketKey::AgeRange(_, previous_max), BucketKey::AgeRange(next_min, _)) => {
                previous_max < next_min
            }
            _ => {
                return Err(AssessmentError::InvalidStandards(format!(
                    "{}: mixes bucket key kinds {previous} and {next}",
                    table.key()
                )))
            }
        };
        if !ordered {
            return Err(AssessmentError::InvalidStandards(format!(
                "{}: bucket keys {previous} and {next} overlap or repeat",
                table.key()
            )));
        }
    }
    Ok(())
}

/// Thresholds should not get easier as the score rises; the interpolator
/// assumes it but tolerates violations, so only log them
fn warn_on_non_monotone(table: &StandardTable) {
    let direction = table.direction();
    for bucket in table.buckets() {
        let regressed = bucket.breakpoints().windows(2).any(|pair| {
            direction.orient(pair[1].threshold) < direction.orient(pair[0].threshold)
        });
        if regressed {
            warn!(
                table = %table.key(),
                bucket = %bucket.key(),
                "Standards thresholds are not monotone in score"
            );
        }
    }
}
