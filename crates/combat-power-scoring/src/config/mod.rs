// ABOUTME: Scoring configuration container with environment overrides and validation
// ABOUTME: Loads defaults, applies COMBAT_POWER_* variables, and caches a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Combat Power Contributors

//! Scoring configuration.
//!
//! `ScoringConfig::load()` starts from product defaults, applies
//! `COMBAT_POWER_*` environment overrides and validates the result.
//! `ScoringConfig::global()` caches one validated instance for the process.

/// Per-category parameter groups
pub mod categories;
/// Configuration error types
pub mod error;

pub use categories::{
    BodyCompositionConfig, CardioConfig, HonorLockConfig, MuscleConfig, PowerConfig,
    StrengthConfig,
};
pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Main scoring configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// One-rep-max estimation and strength extrapolation
    #[serde(default)]
    pub strength: StrengthConfig,
    /// Jump and sprint bonuses
    #[serde(default)]
    pub power: PowerConfig,
    /// Cooper extrapolation and 5 km formula
    #[serde(default)]
    pub cardio: CardioConfig,
    /// Muscle weighting and soft cap
    #[serde(default)]
    pub muscle: MuscleConfig,
    /// FFMI anchors
    #[serde(default)]
    pub body_composition: BodyCompositionConfig,
    /// Unverified display cap
    #[serde(default)]
    pub honor_lock: HonorLockConfig,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first parameter found outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_strength()?;
        self.validate_power_and_cardio()?;
        self.validate_muscle()?;
        self.validate_body_composition()?;

        if !is_positive(self.honor_lock.unverified_cap) {
            return Err(ConfigError::ValueOutOfRange(
                "honor_lock.unverified_cap must be > 0",
            ));
        }
        Ok(())
    }

    fn validate_strength(&self) -> Result<(), ConfigError> {
        let strength = &self.strength;
        if strength.max_reps == 0 {
            return Err(ConfigError::ValueOutOfRange("strength.max_reps must be >= 1"));
        }
        let weakest_divisor = strength.one_rep_max_slope.mul_add(
            -f64::from(strength.max_reps),
            strength.one_rep_max_intercept,
        );
        if !is_positive(weakest_divisor) {
            return Err(ConfigError::InvalidRange(
                "one_rep_max_intercept - one_rep_max_slope * max_reps must stay > 0",
            ));
        }
        if !(0.0..100.0).contains(&strength.overflow_anchor_score) {
            return Err(ConfigError::ValueOutOfRange(
                "strength.overflow_anchor_score must be in [0, 100)",
            ));
        }
        Ok(())
    }

    fn validate_power_and_cardio(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.power.jump_bonus_per_cm)
            || !is_non_negative(self.power.sprint_bonus_per_second)
        {
            return Err(ConfigError::ValueOutOfRange("power bonuses must be >= 0"));
        }

        let cardio = &self.cardio;
        if !(0.0..100.0).contains(&cardio.cooper_overflow_anchor_score) {
            return Err(ConfigError::ValueOutOfRange(
                "cardio.cooper_overflow_anchor_score must be in [0, 100)",
            ));
        }
        if !is_positive(cardio.five_km_benchmark_seconds) {
            return Err(ConfigError::ValueOutOfRange(
                "cardio.five_km_benchmark_seconds must be > 0",
            ));
        }
        if cardio.five_km_benchmark_seconds >= cardio.five_km_baseline_seconds {
            return Err(ConfigError::InvalidRange(
                "five_km_benchmark_seconds must be < five_km_baseline_seconds",
            ));
        }
        if !is_positive(cardio.five_km_seconds_per_bonus_point) {
            return Err(ConfigError::ValueOutOfRange(
                "cardio.five_km_seconds_per_bonus_point must be > 0",
            ));
        }
        Ok(())
    }

    fn validate_muscle(&self) -> Result<(), ConfigError> {
        let muscle = &self.muscle;
        if !is_positive(muscle.smm_weight) {
            return Err(ConfigError::ValueOutOfRange("muscle.smm_weight must be > 0"));
        }
        if !(0.0..100.0).contains(&muscle.overflow_anchor_score) {
            return Err(ConfigError::ValueOutOfRange(
                "muscle.overflow_anchor_score must be in [0, 100)",
            ));
        }
        if !muscle.soft_cap_threshold.is_finite() || muscle.soft_cap_threshold < 100.0 {
            return Err(ConfigError::InvalidRange(
                "muscle.soft_cap_threshold must be >= 100",
            ));
        }
        if !(0.0..=1.0).contains(&muscle.soft_cap_damping) {
            return Err(ConfigError::ValueOutOfRange(
                "muscle.soft_cap_damping must be in [0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_body_composition(&self) -> Result<(), ConfigError> {
        let body = &self.body_composition;
        if !is_positive(body.male_base_ffmi) || body.male_base_ffmi >= body.male_ceiling_ffmi {
            return Err(ConfigError::InvalidRange(
                "0 < male_base_ffmi < male_ceiling_ffmi required",
            ));
        }
        if !is_positive(body.female_base_ffmi)
            || body.female_base_ffmi >= body.female_ceiling_ffmi
        {
            return Err(ConfigError::InvalidRange(
                "0 < female_base_ffmi < female_ceiling_ffmi required",
            ));
        }
        if !(0.0..100.0).contains(&body.base_score) {
            return Err(ConfigError::ValueOutOfRange(
                "body_composition.base_score must be in [0, 100)",
            ));
        }
        if !is_non_negative(body.overflow_points_per_unit)
            || !is_non_negative(body.height_adjustment_per_m)
        {
            return Err(ConfigError::ValueOutOfRange(
                "body composition overflow and height adjustment must be >= 0",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Strength
        Self::apply_env_var("COMBAT_POWER_MAX_REPS", &mut self.strength.max_reps)?;

        // Power (asymmetric bonuses pending product confirmation)
        Self::apply_env_var(
            "COMBAT_POWER_JUMP_BONUS_PER_CM",
            &mut self.power.jump_bonus_per_cm,
        )?;
        Self::apply_env_var(
            "COMBAT_POWER_SPRINT_BONUS_PER_SECOND",
            &mut self.power.sprint_bonus_per_second,
        )?;

        // Cardio
        Self::apply_env_var(
            "COMBAT_POWER_5KM_BENCHMARK_SECONDS",
            &mut self.cardio.five_km_benchmark_seconds,
        )?;
        Self::apply_env_var(
            "COMBAT_POWER_5KM_BASELINE_SECONDS",
            &mut self.cardio.five_km_baseline_seconds,
        )?;
        Self::apply_env_var(
            "COMBAT_POWER_5KM_SECONDS_PER_BONUS_POINT",
            &mut self.cardio.five_km_seconds_per_bonus_point,
        )?;

        // Muscle
        Self::apply_env_var("COMBAT_POWER_SMM_WEIGHT", &mut self.muscle.smm_weight)?;
        Self::apply_env_var(
            "COMBAT_POWER_MUSCLE_SOFT_CAP",
            &mut self.muscle.soft_cap_threshold,
        )?;
        Self::apply_env_var(
            "COMBAT_POWER_MUSCLE_SOFT_CAP_DAMPING",
            &mut self.muscle.soft_cap_damping,
        )?;

        // Honor lock
        Self::apply_env_var(
            "COMBAT_POWER_UNVERIFIED_CAP",
            &mut self.honor_lock.unverified_cap,
        )?;

        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
