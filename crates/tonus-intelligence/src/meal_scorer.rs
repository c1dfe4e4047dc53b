// ABOUTME: Individual meal scoring against a calorie sub-target and preferences
// ABOUTME: Calorie proximity, dietary overlap, allergen disqualification, goal alignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Meal Scorer
//!
//! Scores one catalog meal against a calorie sub-target, dietary
//! preferences, allergens, and goals. An allergen match short-circuits to a
//! strongly negative penalty that dominates every other criterion; any score
//! below the disqualification threshold removes the meal from consideration.
//!
//! Meal-type filtering is the assembler's job; this scorer assumes it is
//! only invoked with meals of the intended type. Tag comparison is
//! case-insensitive because the catalog vocabulary is open-ended.

use crate::config::matching::MealScorerConfig;
use crate::goals;
use tonus_core::models::{GoalTag, MealRecord};

/// Case-insensitive membership test for tag lists
fn contains_tag(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(needle))
}

/// Score a meal against a calorie sub-target and the user's preferences.
///
/// Criteria:
/// - Calorie proximity: full points within the tolerance, then a linear
///   decay of one point per `calorie_decay_per_point` kcal, floored at zero.
/// - Dietary overlap: proportional to how many of the user's preference
///   tags the meal carries; a flat neutral award when there are none.
/// - Allergens: any intersection returns the penalty immediately.
/// - Goal alignment: fixed bonus when the meal's goal tags intersect the
///   vocabulary set mapped from the primary goal.
#[must_use]
pub fn score_meal(
    meal: &MealRecord,
    target_calories: u32,
    user_goals: &[GoalTag],
    dietary_preferences: &[String],
    allergens: &[String],
    config: &MealScorerConfig,
) -> f64 {
    // Disqualifying criterion first: nothing can outweigh an allergen hit
    if allergens
        .iter()
        .any(|allergen| contains_tag(&meal.allergens, allergen))
    {
        return config.allergen_penalty;
    }

    let mut score = 0.0;

    let calorie_diff = (meal.nutrition.calories - f64::from(target_calories)).abs();
    score += if calorie_diff <= config.calorie_tolerance {
        config.calorie_max_points
    } else {
        (config.calorie_max_points - calorie_diff / config.calorie_decay_per_point).max(0.0)
    };

    if dietary_preferences.is_empty() {
        score += config.dietary_neutral_points;
    } else {
        let matched = dietary_preferences
            .iter()
            .filter(|preference| contains_tag(&meal.dietary_tags, preference.as_str()))
            .count();
        score += config.dietary_max_points * matched as f64 / dietary_preferences.len() as f64;
    }

    if let Some(primary) = user_goals.first() {
        let aligned = goals::meal_goal_tags(*primary)
            .iter()
            .any(|tag| contains_tag(&meal.goals, tag));
        if aligned {
            score += config.goal_points;
        }
    }

    score
}

/// Whether a score marks the candidate as disqualified
#[must_use]
pub fn is_disqualified(score: f64, config: &MealScorerConfig) -> bool {
    score < config.disqualified_below
}
