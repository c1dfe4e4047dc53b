// ABOUTME: Assembled daily meal plan and transient scoring types
// ABOUTME: DailyMealPlan slots plus the ScoredCandidate ranking pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

use super::catalog::{MealRecord, MealType};
use serde::{Deserialize, Serialize};

/// A full day of selected meals.
///
/// Derived and transient: recomputed whenever the calorie target or the
/// dietary preferences change. A slot stays empty when no catalog meal of
/// that type qualifies; the plan as a whole is still returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyMealPlan {
    /// Selected breakfast, if any qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealRecord>,
    /// Selected lunch, if any qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealRecord>,
    /// Selected dinner, if any qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealRecord>,
    /// Selected snack, if any qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<MealRecord>,
    /// Sum of the selected meals' actual calories, rounded
    pub total_calories: u32,
    /// The daily calorie target the plan was assembled against
    pub target_calories: u32,
}

impl DailyMealPlan {
    /// The selected meal for a given slot
    #[must_use]
    pub const fn slot(&self, meal_type: MealType) -> Option<&MealRecord> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
            MealType::Other => None,
        }
    }

    /// Iterate over the filled slots
    pub fn meals(&self) -> impl Iterator<Item = &MealRecord> {
        [
            self.breakfast.as_ref(),
            self.lunch.as_ref(),
            self.dinner.as_ref(),
            self.snack.as_ref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Whether all four slots were filled
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.breakfast.is_some()
            && self.lunch.is_some()
            && self.dinner.is_some()
            && self.snack.is_some()
    }
}

/// Transient pairing of a catalog item with its score, used only while
/// ranking candidates
#[derive(Debug, Clone)]
pub struct ScoredCandidate<T> {
    /// The candidate catalog item
    pub item: T,
    /// Its weighted score, higher is better
    pub score: f64,
}
