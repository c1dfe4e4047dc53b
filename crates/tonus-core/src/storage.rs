// ABOUTME: Async persistence seam for computed targets and plan selections
// ABOUTME: RecommendationStore trait plus an in-memory reference backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Storage collaborator interface.
//!
//! Persistence is fire-and-forget from the core's perspective: a `TargetSet`
//! or plan selection is complete and valid the moment it is computed, and a
//! failed save never rolls it back. The trait below is the seam the app's
//! key-value store and remote document store plug into; `InMemoryStore` is
//! the reference backend used in tests.

use crate::errors::AppResult;
use crate::models::{DailyMealPlan, TargetSet};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Persistence backend for computed recommendations, keyed by user id
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Persist a computed target set for a user
    async fn save_targets(&self, user_id: Uuid, targets: &TargetSet) -> AppResult<()>;

    /// Load the most recently saved target set for a user
    async fn load_targets(&self, user_id: Uuid) -> AppResult<Option<TargetSet>>;

    /// Persist the id of the selected workout plan for a user
    async fn save_workout_plan(&self, user_id: Uuid, plan_id: &str) -> AppResult<()>;

    /// Load the selected workout plan id for a user
    async fn load_workout_plan(&self, user_id: Uuid) -> AppResult<Option<String>>;

    /// Persist the assembled daily meal plan for a user
    async fn save_meal_plan(&self, user_id: Uuid, plan: &DailyMealPlan) -> AppResult<()>;

    /// Load the assembled daily meal plan for a user
    async fn load_meal_plan(&self, user_id: Uuid) -> AppResult<Option<DailyMealPlan>>;
}

/// In-memory storage backend
#[derive(Debug, Default)]
pub struct InMemoryStore {
    targets: RwLock<HashMap<Uuid, TargetSet>>,
    workout_plans: RwLock<HashMap<Uuid, String>>,
    meal_plans: RwLock<HashMap<Uuid, DailyMealPlan>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecommendationStore for InMemoryStore {
    async fn save_targets(&self, user_id: Uuid, targets: &TargetSet) -> AppResult<()> {
        self.targets.write().await.insert(user_id, targets.clone());
        Ok(())
    }

    async fn load_targets(&self, user_id: Uuid) -> AppResult<Option<TargetSet>> {
        Ok(self.targets.read().await.get(&user_id).cloned())
    }

    async fn save_workout_plan(&self, user_id: Uuid, plan_id: &str) -> AppResult<()> {
        self.workout_plans
            .write()
            .await
            .insert(user_id, plan_id.to_owned());
        Ok(())
    }

    async fn load_workout_plan(&self, user_id: Uuid) -> AppResult<Option<String>> {
        Ok(self.workout_plans.read().await.get(&user_id).cloned())
    }

    async fn save_meal_plan(&self, user_id: Uuid, plan: &DailyMealPlan) -> AppResult<()> {
        self.meal_plans.write().await.insert(user_id, plan.clone());
        Ok(())
    }

    async fn load_meal_plan(&self, user_id: Uuid) -> AppResult<Option<DailyMealPlan>> {
        Ok(self.meal_plans.read().await.get(&user_id).cloned())
    }
}
