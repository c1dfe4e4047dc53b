// ABOUTME: Computed daily energy and macronutrient target models
// ABOUTME: TargetSet, CalorieScenarios, and MacroSplit value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

use serde::{Deserialize, Serialize};

/// Macro ratio applied when converting calories to gram targets.
///
/// The three fractions are expressed against total calories and sum to 1.0
/// for every preset the calculator uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Fraction of calories from protein
    pub protein: f64,
    /// Fraction of calories from carbohydrates
    pub carbs: f64,
    /// Fraction of calories from fat
    pub fat: f64,
}

/// The six calorie scenarios derived from TDEE, in kcal/day.
///
/// Scenario values satisfy `extreme_loss < loss < mild_loss < maintain <
/// mild_gain < gain` whenever TDEE is positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieScenarios {
    /// Maintenance calories (TDEE)
    pub maintain: u32,
    /// Mild deficit for slow weight loss
    pub mild_loss: u32,
    /// Standard deficit for weight loss
    pub loss: u32,
    /// Aggressive deficit for large weight differences
    pub extreme_loss: u32,
    /// Mild surplus for lean gaining
    pub mild_gain: u32,
    /// Standard surplus for weight gain
    pub gain: u32,
}

/// Personalized daily targets computed once per onboarding session.
///
/// Immutable after creation; recomputed from scratch when the underlying
/// profile changes. All fields are non-negative integers, and `calories`
/// respects the gender-specific floor applied by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetSet {
    /// Active daily calorie target in kcal
    pub calories: u32,
    /// Daily protein target in grams
    pub protein_g: u32,
    /// Daily carbohydrate target in grams
    pub carbs_g: u32,
    /// Daily fat target in grams
    pub fat_g: u32,
    /// Daily water target in milliliters
    pub water_ml: u32,
    /// Basal metabolic rate in kcal/day, rounded
    pub bmr: u32,
    /// Total daily energy expenditure in kcal/day, rounded
    pub tdee: u32,
    /// All six calorie scenarios for display alongside the active target
    pub scenarios: CalorieScenarios,
    /// Macro ratio that produced the gram targets
    pub split: MacroSplit,
}
