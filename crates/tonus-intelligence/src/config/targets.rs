// ABOUTME: Target calculator configuration with literature-backed defaults
// ABOUTME: BMR coefficients, activity factors, calorie scenarios, macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Target Calculator Configuration
//!
//! Coefficients and ratios for the daily target calculation: the BMR formula,
//! the TDEE activity multipliers, the calorie scenario fractions, the
//! goal-driven macro splits, and the hydration factor.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology
//! - Macro distribution ranges: USDA Acceptable Macronutrient Distribution
//!   Ranges (AMDR)

use crate::config::error::ConfigError;
use crate::physiological_constants::{calorie_floors, hydration};
use serde::{Deserialize, Serialize};
use tonus_core::models::MacroSplit;

/// Target calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Mifflin-St Jeor BMR coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie scenarios as fractions of TDEE
    pub scenarios: CalorieScenarioFractions,
    /// Weight-difference thresholds for scenario selection
    pub weight_deltas: WeightDeltaThresholds,
    /// Gender-specific minimum calorie targets
    pub floors: CalorieFloorsConfig,
    /// Goal-driven macro splits
    pub macro_splits: MacroSplitPresets,
    /// Water target per kilogram of body weight (ml/kg)
    pub water_ml_per_kg: f64,
}

/// Mifflin-St Jeor BMR coefficients
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161), also used when gender is absent
    pub female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle` et al. (2010), Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

/// Calorie scenarios expressed as fractions of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieScenarioFractions {
    /// Maintenance: 1.0
    pub maintain: f64,
    /// Mild loss: 0.9
    pub mild_loss: f64,
    /// Loss: 0.79
    pub loss: f64,
    /// Extreme loss: 0.59
    pub extreme_loss: f64,
    /// Mild gain: 1.1
    pub mild_gain: f64,
    /// Gain: 1.21
    pub gain: f64,
}

/// Weight-difference thresholds steering scenario selection (kg)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightDeltaThresholds {
    /// Above this deficit distance, pick the extreme-loss scenario
    pub extreme_loss_kg: f64,
    /// Above this deficit distance, pick the loss scenario
    pub loss_kg: f64,
    /// Above this surplus distance, pick the gain scenario
    pub gain_kg: f64,
}

/// Gender-specific minimum daily calorie targets (kcal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieFloorsConfig {
    /// Floor for male-identified users
    pub male: u32,
    /// Floor for everyone else
    pub default: u32,
}

/// Macro splits applied by goal, first matching goal wins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitPresets {
    /// Default split when no goal dictates one: 25/45/30
    pub balanced: MacroSplit,
    /// Muscle-gain and strength goals: 30/45/25
    pub muscle_gain: MacroSplit,
    /// Weight-loss goal: 35/35/30
    pub weight_loss: MacroSplit,
    /// Endurance goal: 20/55/25
    pub endurance: MacroSplit,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for CalorieScenarioFractions {
    fn default() -> Self {
        Self {
            maintain: 1.0,
            mild_loss: 0.9,
            loss: 0.79,
            extreme_loss: 0.59,
            mild_gain: 1.1,
            gain: 1.21,
        }
    }
}

impl Default for WeightDeltaThresholds {
    fn default() -> Self {
        Self {
            extreme_loss_kg: 10.0,
            loss_kg: 5.0,
            gain_kg: 5.0,
        }
    }
}

impl Default for CalorieFloorsConfig {
    fn default() -> Self {
        Self {
            male: calorie_floors::MIN_DAILY_KCAL_MALE,
            default: calorie_floors::MIN_DAILY_KCAL_DEFAULT,
        }
    }
}

impl Default for MacroSplitPresets {
    fn default() -> Self {
        Self {
            balanced: MacroSplit {
                protein: 0.25,
                carbs: 0.45,
                fat: 0.30,
            },
            muscle_gain: MacroSplit {
                protein: 0.30,
                carbs: 0.45,
                fat: 0.25,
            },
            weight_loss: MacroSplit {
                protein: 0.35,
                carbs: 0.35,
                fat: 0.30,
            },
            endurance: MacroSplit {
                protein: 0.20,
                carbs: 0.55,
                fat: 0.25,
            },
        }
    }
}

impl TargetsConfig {
    /// Validate the target calculator configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a multiplier is below 1.0, the scenario
    /// fractions are not strictly ordered, a macro split does not sum to 1.0,
    /// or the hydration factor is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.activity_factors;
        if f.sedentary < 1.0
            || f.lightly_active < f.sedentary
            || f.moderately_active < f.lightly_active
            || f.very_active < f.moderately_active
            || f.extra_active < f.very_active
        {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be >= 1.0 and non-decreasing",
            ));
        }

        let s = &self.scenarios;
        if !(s.extreme_loss < s.loss
            && s.loss < s.mild_loss
            && s.mild_loss < s.maintain
            && s.maintain < s.mild_gain
            && s.mild_gain < s.gain)
        {
            return Err(ConfigError::InvalidWeights(
                "calorie scenario fractions must be strictly ordered",
            ));
        }

        for split in [
            self.macro_splits.balanced,
            self.macro_splits.muscle_gain,
            self.macro_splits.weight_loss,
            self.macro_splits.endurance,
        ] {
            let sum = split.protein + split.carbs + split.fat;
            if (sum - 1.0).abs() > 1e-6 {
                return Err(ConfigError::InvalidWeights(
                    "macro split fractions must sum to 1.0",
                ));
            }
        }

        if self.water_ml_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "water_ml_per_kg must be positive",
            ));
        }

        Ok(())
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            scenarios: CalorieScenarioFractions::default(),
            weight_deltas: WeightDeltaThresholds::default(),
            floors: CalorieFloorsConfig::default(),
            macro_splits: MacroSplitPresets::default(),
            water_ml_per_kg: hydration::WATER_ML_PER_KG,
        }
    }
}
