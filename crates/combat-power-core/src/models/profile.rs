// ABOUTME: Demographic profile, gender normalization and verification state
// ABOUTME: Validates the prerequisites every bracket lookup depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AssessmentError, AssessmentResult};

/// Canonical two-value gender used for table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male standards
    Male,
    /// Female standards
    Female,
}

impl Gender {
    /// Lowercase identifier used in standards data
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AssessmentError;

    /// Accepts English identifiers in any case and the localized forms
    /// stored by older clients.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "male" | "男性" | "男" => Ok(Self::Male),
            "female" | "女性" | "女" => Ok(Self::Female),
            _ => Err(AssessmentError::missing_prerequisite(ProfileField::Gender)),
        }
    }
}

/// Profile fields that gate scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Age in whole years
    Age,
    /// Canonical gender
    Gender,
    /// Bodyweight in kilograms
    Bodyweight,
    /// Height in centimetres (body composition only)
    Height,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Bodyweight => "bodyweight",
            Self::Height => "height",
        };
        f.write_str(name)
    }
}

/// Validated demographic profile.
///
/// Construction guarantees a positive age and bodyweight, so aggregators can
/// resolve brackets without re-checking. Height is optional because only the
/// body composition category needs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput")]
pub struct DemographicProfile {
    age: u32,
    gender: Gender,
    bodyweight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height_cm: Option<f64>,
}

impl DemographicProfile {
    /// Create a profile from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::MissingPrerequisite`] when age is zero or
    /// bodyweight is not a positive finite number.
    pub fn new(age: u32, gender: Gender, bodyweight_kg: f64) -> AssessmentResult<Self> {
        if age == 0 {
            return Err(AssessmentError::missing_prerequisite(ProfileField::Age));
        }
        if !bodyweight_kg.is_finite() || bodyweight_kg <= 0.0 {
            return Err(AssessmentError::missing_prerequisite(ProfileField::Bodyweight));
        }
        Ok(Self {
            age,
            gender,
            bodyweight_kg,
            height_cm: None,
        })
    }

    /// Attach a height for body composition scoring.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::MissingPrerequisite`] when the height is not
    /// a positive finite number.
    pub fn with_height(mut self, height_cm: f64) -> AssessmentResult<Self> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AssessmentError::missing_prerequisite(ProfileField::Height));
        }
        self.height_cm = Some(height_cm);
        Ok(self)
    }

    /// Age in whole years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Canonical gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Bodyweight in kilograms
    #[must_use]
    pub const fn bodyweight_kg(&self) -> f64 {
        self.bodyweight_kg
    }

    /// Height in centimetres, when known
    #[must_use]
    pub const fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    /// Height in centimetres, or a missing prerequisite error.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::MissingPrerequisite`] when no height was set.
    pub fn require_height_cm(&self) -> AssessmentResult<f64> {
        self.height_cm
            .ok_or(AssessmentError::missing_prerequisite(ProfileField::Height))
    }
}

/// Raw profile as captured by a form, before normalization.
///
/// Every field may be absent; [`ProfileInput::into_profile`] reports the
/// first missing prerequisite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in whole years
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender, possibly localized
    #[serde(default)]
    pub gender: Option<String>,
    /// Bodyweight in kilograms
    #[serde(default)]
    pub bodyweight_kg: Option<f64>,
    /// Height in centimetres
    #[serde(default)]
    pub height_cm: Option<f64>,
}

impl ProfileInput {
    /// Normalize into a validated [`DemographicProfile`].
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::MissingPrerequisite`] naming the first
    /// absent or unusable field, checked in the order gender, age,
    /// bodyweight, height.
    pub fn into_profile(self) -> AssessmentResult<DemographicProfile> {
        let gender = self
            .gender
            .as_deref()
            .ok_or(AssessmentError::missing_prerequisite(ProfileField::Gender))?
            .parse::<Gender>()?;
        let age = self
            .age
            .ok_or(AssessmentError::missing_prerequisite(ProfileField::Age))?;
        let bodyweight = self
            .bodyweight_kg
            .ok_or(AssessmentError::missing_prerequisite(ProfileField::Bodyweight))?;

        let profile = DemographicProfile::new(age, gender, bodyweight)?;
        match self.height_cm {
            Some(height) => profile.with_height(height),
            None => Ok(profile),
        }
    }
}

impl TryFrom<ProfileInput> for DemographicProfile {
    type Error = AssessmentError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        input.into_profile()
    }
}

/// Whether the moderation workflow has verified the user.
///
/// The engine only reads this value; unverified users have record-breaking
/// scores capped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// Scores above 100 are displayed as recorded
    Verified,
    /// Scores above 100 are displayed as 100
    #[default]
    Unverified,
}

impl VerificationState {
    /// True when the profile has been verified
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl From<bool> for VerificationState {
    fn from(is_verified: bool) -> Self {
        if is_verified {
            Self::Verified
        } else {
            Self::Unverified
        }
    }
}
