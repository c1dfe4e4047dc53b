// ABOUTME: Configuration module for the Tonus intelligence crate
// ABOUTME: Aggregates target, matcher, scorer, and planner configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Intelligence configuration.
//!
//! All tunable weights, thresholds, and ratios used by the algorithms live
//! here as plain serde structs with documented defaults. Every algorithm
//! entry point takes the relevant section by reference, so tests and callers
//! can inject synthetic configurations; [`IntelligenceConfig::global`] is the
//! convenience accessor for the defaults.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Configuration error types
pub mod error;

/// Workout matcher, meal scorer, and meal planner configuration
pub mod matching;

/// Target calculator configuration
pub mod targets;

pub use error::ConfigError;
pub use matching::{MealPlanConfig, MealScorerConfig, WorkoutMatcherConfig};
pub use targets::{
    ActivityFactorsConfig, BmrConfig, CalorieFloorsConfig, CalorieScenarioFractions,
    MacroSplitPresets, TargetsConfig, WeightDeltaThresholds,
};

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Top-level configuration for the recommendation core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Target calculator settings
    pub targets: TargetsConfig,
    /// Workout plan matcher weights
    pub workout_matcher: WorkoutMatcherConfig,
    /// Meal scorer weights and thresholds
    pub meal_scorer: MealScorerConfig,
    /// Daily meal plan assembly settings
    pub meal_plan: MealPlanConfig,
}

impl IntelligenceConfig {
    /// Global configuration instance with default values
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(Self::default)
    }

    /// Validate the whole configuration tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in any section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.targets.validate()?;
        self.workout_matcher.validate()?;
        self.meal_scorer.validate()?;
        self.meal_plan.validate()?;
        Ok(())
    }
}
