// ABOUTME: Daily energy and macronutrient target calculation
// ABOUTME: Mifflin-St Jeor BMR, TDEE, calorie scenarios, macro grams, water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Target Calculator
//!
//! Computes a [`TargetSet`] from an onboarding profile: BMR via the
//! Mifflin-St Jeor equation, TDEE via activity multipliers, six calorie
//! scenarios, a goal-driven active calorie target with gender-specific
//! floors, macro gram targets, and a hydration target.
//!
//! The calculator never fails. Missing inputs degrade to the documented
//! defaults (absent gender uses the female formula branch, absent numerics
//! count as zero, absent activity level counts as moderately active), and
//! every returned field is a non-negative integer.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use crate::config::targets::{
    ActivityFactorsConfig, BmrConfig, CalorieScenarioFractions, TargetsConfig,
};
use crate::physiological_constants::energy;
use tonus_core::models::{
    ActivityLevel, CalorieScenarios, Gender, GoalTag, MacroSplit, TargetSet, UserProfile,
};
use tracing::debug;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Formula: `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + offset`,
/// where the offset is +5 for male users and -161 otherwise. An absent
/// gender uses the female branch. The result is clamped to non-negative so
/// that degenerate zero-valued inputs degrade instead of going negative.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Option<Gender>,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Some(Gender::Male) => config.male_constant,
        _ => config.female_constant,
    };

    let bmr = config.weight_coef * weight_kg.max(0.0)
        + config.height_coef * height_cm.max(0.0)
        + config.age_coef * f64::from(age)
        + gender_constant;

    bmr.max(0.0)
}

/// Calculate Total Daily Energy Expenditure.
///
/// Formula: `TDEE = BMR x activity factor`. An absent activity level uses
/// the moderately-active multiplier.
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: Option<ActivityLevel>,
    config: &ActivityFactorsConfig,
) -> f64 {
    let factor = match activity_level.unwrap_or_default() {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    bmr.max(0.0) * factor
}

/// Derive the six calorie scenarios from TDEE, each rounded independently
#[must_use]
pub fn calorie_scenarios(tdee: f64, config: &CalorieScenarioFractions) -> CalorieScenarios {
    let scenario = |fraction: f64| (tdee * fraction).round().max(0.0) as u32;
    CalorieScenarios {
        maintain: scenario(config.maintain),
        mild_loss: scenario(config.mild_loss),
        loss: scenario(config.loss),
        extreme_loss: scenario(config.extreme_loss),
        mild_gain: scenario(config.mild_gain),
        gain: scenario(config.gain),
    }
}

/// Pick the active calorie scenario from goals and the weight difference.
///
/// A weight-loss goal, or a current weight above the target weight, selects
/// a deficit scenario scaled by how far the user is from the target. A
/// muscle-gain goal, or a current weight below the target, selects a surplus
/// scenario the same way. Everything else maintains.
fn select_calorie_target(
    profile: &UserProfile,
    scenarios: CalorieScenarios,
    config: &TargetsConfig,
) -> u32 {
    let weight_kg = profile.weight_kg().unwrap_or(0.0);
    let target_kg = profile.target_weight_kg();

    let wants_loss = profile.goals.iter().any(|g| g.is_weight_loss())
        || target_kg.is_some_and(|t| weight_kg > t);
    let wants_gain = profile.goals.iter().any(|g| g.is_muscle_gain())
        || target_kg.is_some_and(|t| weight_kg < t);

    let deltas = &config.weight_deltas;
    if wants_loss {
        let deficit = target_kg.map_or(0.0, |t| weight_kg - t);
        if deficit > deltas.extreme_loss_kg {
            scenarios.extreme_loss
        } else if deficit > deltas.loss_kg {
            scenarios.loss
        } else {
            scenarios.mild_loss
        }
    } else if wants_gain {
        let surplus = target_kg.map_or(0.0, |t| t - weight_kg);
        if surplus > deltas.gain_kg {
            scenarios.gain
        } else {
            scenarios.mild_gain
        }
    } else {
        scenarios.maintain
    }
}

/// Macro split for the profile's goals, first matching goal wins
fn macro_split_for_goals(goals: &[GoalTag], config: &TargetsConfig) -> MacroSplit {
    let presets = &config.macro_splits;
    for goal in goals {
        match goal {
            GoalTag::GainMuscle | GoalTag::BuildStrength => return presets.muscle_gain,
            GoalTag::LoseWeight => return presets.weight_loss,
            GoalTag::ImproveEndurance => return presets.endurance,
            GoalTag::ImproveFlexibility | GoalTag::GeneralFitness => {}
        }
    }
    presets.balanced
}

/// Compute the complete daily target set for a profile.
///
/// Runs the full pipeline: BMR, TDEE, the six calorie scenarios, the active
/// calorie target with its gender-specific floor, macro grams at 4/4/9 kcal
/// per gram, and the water target. Macro grams round independently, so their
/// energy sum approximates the calorie target rather than matching it
/// exactly.
#[must_use]
pub fn calculate_targets(profile: &UserProfile, config: &TargetsConfig) -> TargetSet {
    let weight_kg = profile.weight_kg().unwrap_or(0.0);

    let bmr = calculate_bmr(
        weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let scenarios = calorie_scenarios(tdee, &config.scenarios);

    let floor = match profile.gender {
        Some(Gender::Male) => config.floors.male,
        _ => config.floors.default,
    };
    let calories = select_calorie_target(profile, scenarios, config).max(floor);

    let split = macro_split_for_goals(&profile.goals, config);
    let calories_f = f64::from(calories);
    let protein_g = (calories_f * split.protein / energy::KCAL_PER_GRAM_PROTEIN).round() as u32;
    let carbs_g = (calories_f * split.carbs / energy::KCAL_PER_GRAM_CARBS).round() as u32;
    let fat_g = (calories_f * split.fat / energy::KCAL_PER_GRAM_FAT).round() as u32;

    let water_ml = (weight_kg * config.water_ml_per_kg).round().max(0.0) as u32;

    debug!(
        bmr = bmr.round(),
        tdee = tdee.round(),
        calories,
        "calculated daily targets"
    );

    TargetSet {
        calories,
        protein_g,
        carbs_g,
        fat_g,
        water_ml,
        bmr: bmr.round() as u32,
        tdee: tdee.round() as u32,
        scenarios,
        split,
    }
}
