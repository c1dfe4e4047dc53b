// ABOUTME: Daily meal plan assembly from per-slot calorie budgets
// ABOUTME: Budget split, per-meal-type selection, and DailyMealPlan construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Daily Meal Plan Assembler
//!
//! Splits the daily calorie target into four per-meal-type budgets, runs the
//! meal scorer over the catalog candidates of each type, and assembles the
//! best pick per slot into a [`DailyMealPlan`]. A slot with no qualifying
//! candidate simply stays empty; once a calorie target exists and the
//! catalog is non-empty the assembler always returns a plan.

use crate::config::matching::{MealPlanConfig, MealScorerConfig};
use crate::meal_scorer::score_meal;
use tonus_core::models::{DailyMealPlan, MealRecord, MealType, ScoredCandidate, UserProfile};
use tracing::debug;

/// Per-meal-type calorie budgets, each rounded independently.
///
/// The four values are not reconciled back to the daily total, so a few kcal
/// of rounding drift against the target is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealBudgets {
    /// Breakfast budget in kcal
    pub breakfast: u32,
    /// Lunch budget in kcal
    pub lunch: u32,
    /// Dinner budget in kcal
    pub dinner: u32,
    /// Snack budget in kcal
    pub snack: u32,
}

impl MealBudgets {
    /// Budget for a given meal type
    #[must_use]
    pub const fn for_meal_type(&self, meal_type: MealType) -> u32 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
            MealType::Other => 0,
        }
    }
}

/// Split the daily calorie target into the four per-slot budgets
#[must_use]
pub fn split_calorie_budget(target_calories: u32, config: &MealPlanConfig) -> MealBudgets {
    let total = f64::from(target_calories);
    MealBudgets {
        breakfast: (total * config.breakfast_share).round() as u32,
        lunch: (total * config.lunch_share).round() as u32,
        dinner: (total * config.dinner_share).round() as u32,
        snack: (total * config.snack_share).round() as u32,
    }
}

/// Select the best meal of one type against its calorie budget.
///
/// Candidates scoring below zero are discarded; of the rest, the highest
/// score wins and catalog order breaks ties. Returns `None` when the type
/// has no candidates or all were disqualified.
#[must_use]
pub fn select_meal_for_slot<'a>(
    catalog: &'a [MealRecord],
    meal_type: MealType,
    budget: u32,
    profile: &UserProfile,
    config: &MealScorerConfig,
) -> Option<&'a MealRecord> {
    let mut candidates: Vec<ScoredCandidate<&MealRecord>> = catalog
        .iter()
        .filter(|meal| meal.meal_type == meal_type)
        .map(|meal| ScoredCandidate {
            score: score_meal(
                meal,
                budget,
                &profile.goals,
                &profile.dietary_preferences,
                &profile.allergens,
                config,
            ),
            item: meal,
        })
        .filter(|candidate| candidate.score >= 0.0)
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.first().map(|candidate| candidate.item)
}

/// Assemble a full day of meals against the daily calorie target.
///
/// Returns `None` when no calorie target is set or the catalog is empty.
/// Otherwise every slot is filled with the best qualifying meal of its type,
/// or left empty when none qualifies, and `total_calories` sums what was
/// actually selected.
#[must_use]
pub fn select_daily_meal_plan(
    catalog: &[MealRecord],
    profile: &UserProfile,
    calorie_target: Option<u32>,
    plan_config: &MealPlanConfig,
    scorer_config: &MealScorerConfig,
) -> Option<DailyMealPlan> {
    let target_calories = calorie_target?;
    if catalog.is_empty() {
        return None;
    }

    let budgets = split_calorie_budget(target_calories, plan_config);
    let pick = |meal_type: MealType| {
        select_meal_for_slot(
            catalog,
            meal_type,
            budgets.for_meal_type(meal_type),
            profile,
            scorer_config,
        )
        .cloned()
    };

    let mut plan = DailyMealPlan {
        breakfast: pick(MealType::Breakfast),
        lunch: pick(MealType::Lunch),
        dinner: pick(MealType::Dinner),
        snack: pick(MealType::Snack),
        total_calories: 0,
        target_calories,
    };

    let total: f64 = plan.meals().map(|meal| meal.nutrition.calories).sum();
    plan.total_calories = total.round().max(0.0) as u32;

    debug!(
        target_calories,
        total_calories = plan.total_calories,
        complete = plan.is_complete(),
        "assembled daily meal plan"
    );

    Some(plan)
}
