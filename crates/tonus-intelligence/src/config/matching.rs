// ABOUTME: Catalog matching configuration for workout plans and meals
// ABOUTME: Scoring weights, disqualification thresholds, and budget proportions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Matching Engine Configuration
//!
//! Weights and thresholds for the workout plan matcher, the meal scorer, and
//! the daily meal plan assembler. Partial-credit weights are always smaller
//! than their exact-match counterparts; validation enforces this.

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Workout plan matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutMatcherConfig {
    /// Points for an exact experience-tier match
    pub experience_exact: u32,
    /// Points for an adjacent experience tier
    pub experience_adjacent: u32,
    /// Points for matching the primary goal
    pub goal_primary: u32,
    /// Additional points when the secondary goal matches
    pub goal_secondary: u32,
    /// Points for an exact equipment match
    pub equipment_exact: u32,
    /// Partial credit for a bodyweight profile on a minimal-equipment plan
    pub equipment_none_minimal: u32,
    /// Partial credit for a gym profile on a dumbbell plan
    pub equipment_gym_dumbbells: u32,
    /// Points by weekly-frequency distance: index 0 is an exact match,
    /// index 1 one day off, index 2 two days off
    pub frequency_closeness: [u32; 3],
    /// Weekly frequency assumed when no workout days were selected
    pub default_weekly_frequency: u8,
}

/// Meal scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealScorerConfig {
    /// Maximum points for calorie proximity
    pub calorie_max_points: f64,
    /// Calorie distance that still earns full proximity points (kcal)
    pub calorie_tolerance: f64,
    /// Kcal of distance that costs one proximity point
    pub calorie_decay_per_point: f64,
    /// Maximum points for dietary-tag overlap
    pub dietary_max_points: f64,
    /// Flat points when the profile has no dietary preferences
    pub dietary_neutral_points: f64,
    /// Points for goal-tag alignment
    pub goal_points: f64,
    /// Score assigned when an allergen matches, dominating everything else
    pub allergen_penalty: f64,
    /// Scores below this value mark a disqualified candidate
    pub disqualified_below: f64,
}

/// Daily meal plan assembly configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Fraction of the daily calorie target allotted to breakfast
    pub breakfast_share: f64,
    /// Fraction allotted to lunch
    pub lunch_share: f64,
    /// Fraction allotted to dinner
    pub dinner_share: f64,
    /// Fraction allotted to the snack
    pub snack_share: f64,
}

impl Default for WorkoutMatcherConfig {
    fn default() -> Self {
        Self {
            experience_exact: 40,
            experience_adjacent: 20,
            goal_primary: 30,
            goal_secondary: 15,
            equipment_exact: 15,
            equipment_none_minimal: 10,
            equipment_gym_dumbbells: 8,
            frequency_closeness: [15, 10, 5],
            default_weekly_frequency: 3,
        }
    }
}

impl Default for MealScorerConfig {
    fn default() -> Self {
        Self {
            calorie_max_points: 50.0,
            calorie_tolerance: 50.0,
            calorie_decay_per_point: 10.0,
            dietary_max_points: 30.0,
            dietary_neutral_points: 15.0,
            goal_points: 20.0,
            allergen_penalty: -1000.0,
            disqualified_below: -100.0,
        }
    }
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            breakfast_share: 0.25,
            lunch_share: 0.35,
            dinner_share: 0.30,
            snack_share: 0.10,
        }
    }
}

impl WorkoutMatcherConfig {
    /// Validate the matcher weights.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when partial credit exceeds the
    /// corresponding exact-match weight or the frequency weights increase
    /// with distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.experience_adjacent > self.experience_exact {
            return Err(ConfigError::InvalidWeights(
                "adjacent-tier credit must not exceed the exact-tier weight",
            ));
        }
        if self.equipment_none_minimal > self.equipment_exact
            || self.equipment_gym_dumbbells > self.equipment_exact
        {
            return Err(ConfigError::InvalidWeights(
                "equipment partial credit must not exceed the exact weight",
            ));
        }
        if self.frequency_closeness[1] > self.frequency_closeness[0]
            || self.frequency_closeness[2] > self.frequency_closeness[1]
        {
            return Err(ConfigError::InvalidWeights(
                "frequency weights must not increase with distance",
            ));
        }
        if self.default_weekly_frequency == 0 || self.default_weekly_frequency > 7 {
            return Err(ConfigError::ValueOutOfRange(
                "default weekly frequency must be 1-7",
            ));
        }
        Ok(())
    }
}

impl MealScorerConfig {
    /// Validate the scorer thresholds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the point maxima are not positive or
    /// the allergen penalty does not land in the disqualified range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_max_points <= 0.0
            || self.dietary_max_points <= 0.0
            || self.goal_points <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "scoring maxima must be positive",
            ));
        }
        if self.calorie_decay_per_point <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_decay_per_point must be positive",
            ));
        }
        if self.allergen_penalty >= self.disqualified_below {
            return Err(ConfigError::InvalidWeights(
                "allergen penalty must fall below the disqualification threshold",
            ));
        }
        Ok(())
    }
}

impl MealPlanConfig {
    /// Validate the budget proportions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the four shares do not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.breakfast_share + self.lunch_share + self.dinner_share + self.snack_share;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(
                "meal budget shares must sum to 1.0",
            ));
        }
        Ok(())
    }
}
