// ABOUTME: Tests for the in-memory recommendation store
// ABOUTME: Covers save/load round trips and overwrite semantics per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness
//! In-memory storage backend tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tonus_core::models::{CalorieScenarios, DailyMealPlan, MacroSplit, TargetSet};
use tonus_core::storage::{InMemoryStore, RecommendationStore};
use uuid::Uuid;

fn sample_targets(calories: u32) -> TargetSet {
    TargetSet {
        calories,
        protein_g: 160,
        carbs_g: 288,
        fat_g: 85,
        water_ml: 2450,
        bmr: 1649,
        tdee: 2556,
        scenarios: CalorieScenarios {
            maintain: 2556,
            mild_loss: 2300,
            loss: 2019,
            extreme_loss: 1508,
            mild_gain: 2811,
            gain: 3092,
        },
        split: MacroSplit {
            protein: 0.25,
            carbs: 0.45,
            fat: 0.30,
        },
    }
}

#[tokio::test]
async fn targets_round_trip_per_user() {
    let store = InMemoryStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    store.save_targets(alice, &sample_targets(2556)).await.unwrap();
    store.save_targets(bob, &sample_targets(1800)).await.unwrap();

    let loaded = store.load_targets(alice).await.unwrap().unwrap();
    assert_eq!(loaded.calories, 2556);
    let loaded = store.load_targets(bob).await.unwrap().unwrap();
    assert_eq!(loaded.calories, 1800);
    assert!(store.load_targets(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn recomputed_targets_overwrite_previous_save() {
    let store = InMemoryStore::new();
    let user = Uuid::new_v4();

    store.save_targets(user, &sample_targets(2556)).await.unwrap();
    store.save_targets(user, &sample_targets(2019)).await.unwrap();

    let loaded = store.load_targets(user).await.unwrap().unwrap();
    assert_eq!(loaded.calories, 2019);
}

#[tokio::test]
async fn plan_selections_round_trip() {
    let store = InMemoryStore::new();
    let user = Uuid::new_v4();

    store.save_workout_plan(user, "wp-002").await.unwrap();
    assert_eq!(
        store.load_workout_plan(user).await.unwrap().as_deref(),
        Some("wp-002")
    );

    let meal_plan = DailyMealPlan {
        total_calories: 1990,
        target_calories: 2000,
        ..DailyMealPlan::default()
    };
    store.save_meal_plan(user, &meal_plan).await.unwrap();
    let loaded = store.load_meal_plan(user).await.unwrap().unwrap();
    assert_eq!(loaded.total_calories, 1990);
    assert!(loaded.breakfast.is_none());
}
