// ABOUTME: Comprehensive algorithm tests for the daily target calculator
// ABOUTME: Covers BMR, TDEE, calorie scenarios, floors, macro splits, and water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness
//! Comprehensive algorithm tests for the target calculator
//!
//! Covers the full calculation pipeline:
//! - Mifflin-St Jeor BMR for male/female/absent gender
//! - TDEE for all five activity levels
//! - Calorie scenario derivation and ordering
//! - Goal- and weight-delta-driven scenario selection
//! - Gender-specific calorie floors
//! - Macro splits per goal with independent gram rounding
//! - Hydration target and imperial weight input

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use tonus_core::models::{
    ActivityLevel, BodyWeight, Gender, GoalTag, UserProfile,
};
use tonus_intelligence::config::IntelligenceConfig;
use tonus_intelligence::targets::{
    calculate_bmr, calculate_targets, calculate_tdee, calorie_scenarios,
};

fn base_profile() -> UserProfile {
    UserProfile {
        gender: Some(Gender::Male),
        weight: Some(BodyWeight::kg(70.0)),
        height_cm: 175.0,
        age: 30,
        activity_level: Some(ActivityLevel::ModeratelyActive),
        ..UserProfile::default()
    }
}

// ============================================================================
// BMR TESTS - Mifflin-St Jeor
// ============================================================================

#[test]
fn bmr_male_typical() {
    let config = &IntelligenceConfig::global().targets;

    // 30-year-old male, 70kg, 175cm:
    // 10 * 70 + 6.25 * 175 - 5 * 30 + 5 = 700 + 1093.75 - 150 + 5 = 1648.75
    let bmr = calculate_bmr(70.0, 175.0, 30, Some(Gender::Male), &config.bmr);
    assert!((bmr - 1648.75).abs() < 1e-9);
}

#[test]
fn bmr_female_typical() {
    let config = &IntelligenceConfig::global().targets;

    // 25-year-old female, 60kg, 165cm:
    // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    let bmr = calculate_bmr(60.0, 165.0, 25, Some(Gender::Female), &config.bmr);
    assert!((bmr - 1345.25).abs() < 1e-9);
}

#[test]
fn bmr_absent_gender_uses_female_branch() {
    let config = &IntelligenceConfig::global().targets;

    let absent = calculate_bmr(60.0, 165.0, 25, None, &config.bmr);
    let female = calculate_bmr(60.0, 165.0, 25, Some(Gender::Female), &config.bmr);
    assert_eq!(absent, female);
}

#[test]
fn bmr_never_negative_on_degenerate_input() {
    let config = &IntelligenceConfig::global().targets;

    // All-zero inputs would otherwise land at the female constant of -161
    let bmr = calculate_bmr(0.0, 0.0, 0, None, &config.bmr);
    assert_eq!(bmr, 0.0);
}

// ============================================================================
// TDEE TESTS - activity multipliers
// ============================================================================

#[test]
fn tdee_all_activity_levels() {
    let config = &IntelligenceConfig::global().targets;
    let bmr = 1648.75;

    let cases = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtraActive, 1.9),
    ];
    for (level, factor) in cases {
        let tdee = calculate_tdee(bmr, Some(level), &config.activity_factors);
        assert!((tdee - bmr * factor).abs() < 1e-9);
    }
}

#[test]
fn tdee_absent_activity_defaults_to_moderate() {
    let config = &IntelligenceConfig::global().targets;

    let tdee = calculate_tdee(1648.75, None, &config.activity_factors);
    assert!((tdee - 1648.75 * 1.55).abs() < 1e-9);
}

// ============================================================================
// CALORIE SCENARIO TESTS
// ============================================================================

#[test]
fn scenarios_for_moderate_male() {
    let config = &IntelligenceConfig::global().targets;

    // TDEE = 1648.75 * 1.55 = 2555.5625
    let scenarios = calorie_scenarios(2555.5625, &config.scenarios);
    assert_eq!(scenarios.maintain, 2556);
    assert_eq!(scenarios.mild_loss, 2300);
    assert_eq!(scenarios.loss, 2019);
    assert_eq!(scenarios.extreme_loss, 1508);
    assert_eq!(scenarios.mild_gain, 2811);
    assert_eq!(scenarios.gain, 3092);
}

#[test]
fn scenarios_strictly_ordered_for_positive_tdee() {
    let config = &IntelligenceConfig::global().targets;

    for tdee in [1200.0, 1987.6, 2555.5625, 3400.0] {
        let s = calorie_scenarios(tdee, &config.scenarios);
        assert!(s.extreme_loss < s.loss);
        assert!(s.loss < s.mild_loss);
        assert!(s.mild_loss < s.maintain);
        assert!(s.maintain < s.mild_gain);
        assert!(s.mild_gain < s.gain);
    }
}

// ============================================================================
// FULL CALCULATION TESTS - calculate_targets
// ============================================================================

#[test]
fn no_goals_maintains() {
    let config = &IntelligenceConfig::global().targets;

    let targets = calculate_targets(&base_profile(), config);
    assert_eq!(targets.bmr, 1649);
    assert_eq!(targets.tdee, 2556);
    assert_eq!(targets.calories, targets.scenarios.maintain);
    assert_eq!(targets.calories, 2556);
}

#[test]
fn weight_loss_goal_with_ten_kg_delta_picks_loss() {
    let config = &IntelligenceConfig::global().targets;

    // 10 kg above target is not strictly greater than the 10 kg threshold,
    // so this stays in the standard loss scenario
    let profile = UserProfile {
        goals: vec![GoalTag::LoseWeight],
        target_weight: Some(BodyWeight::kg(60.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, 2019);
}

#[test]
fn weight_loss_goal_with_large_delta_picks_extreme_loss() {
    let config = &IntelligenceConfig::global().targets;

    let profile = UserProfile {
        goals: vec![GoalTag::LoseWeight],
        target_weight: Some(BodyWeight::kg(55.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, targets.scenarios.extreme_loss);
}

#[test]
fn weight_loss_goal_without_target_picks_mild_loss() {
    let config = &IntelligenceConfig::global().targets;

    let profile = UserProfile {
        goals: vec![GoalTag::LoseWeight],
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, targets.scenarios.mild_loss);
}

#[test]
fn weight_above_target_without_goal_still_cuts() {
    let config = &IntelligenceConfig::global().targets;

    // No goal tags, but current weight exceeds the target by 10 kg
    let profile = UserProfile {
        target_weight: Some(BodyWeight::kg(60.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, targets.scenarios.loss);
}

#[test]
fn muscle_gain_goal_with_large_surplus_picks_gain() {
    let config = &IntelligenceConfig::global().targets;

    let profile = UserProfile {
        goals: vec![GoalTag::GainMuscle],
        target_weight: Some(BodyWeight::kg(80.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, targets.scenarios.gain);
    assert_eq!(targets.calories, 3092);
}

#[test]
fn muscle_gain_goal_with_small_surplus_picks_mild_gain() {
    let config = &IntelligenceConfig::global().targets;

    let profile = UserProfile {
        goals: vec![GoalTag::GainMuscle],
        target_weight: Some(BodyWeight::kg(73.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, targets.scenarios.mild_gain);
}

// ============================================================================
// CALORIE FLOOR TESTS
// ============================================================================

#[test]
fn male_floor_enforced() {
    let config = &IntelligenceConfig::global().targets;

    // Small sedentary male on a deficit lands below 1500 before the floor:
    // BMR = 450 + 937.5 - 300 + 5 = 1092.5, TDEE = 1311, mild loss = 1180
    let profile = UserProfile {
        gender: Some(Gender::Male),
        weight: Some(BodyWeight::kg(45.0)),
        height_cm: 150.0,
        age: 60,
        activity_level: Some(ActivityLevel::Sedentary),
        goals: vec![GoalTag::LoseWeight],
        target_weight: Some(BodyWeight::kg(44.0)),
        ..UserProfile::default()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.calories, 1500);
}

#[test]
fn default_floor_applies_to_empty_profile() {
    let config = &IntelligenceConfig::global().targets;

    let targets = calculate_targets(&UserProfile::default(), config);
    assert_eq!(targets.bmr, 0);
    assert_eq!(targets.tdee, 0);
    assert_eq!(targets.calories, 1200);
    assert_eq!(targets.water_ml, 0);
}

#[test]
fn floor_invariant_across_profiles() {
    let config = &IntelligenceConfig::global().targets;

    let male = UserProfile {
        gender: Some(Gender::Male),
        ..UserProfile::default()
    };
    assert!(calculate_targets(&male, config).calories >= 1500);

    let female = UserProfile {
        gender: Some(Gender::Female),
        ..UserProfile::default()
    };
    assert!(calculate_targets(&female, config).calories >= 1200);
}

// ============================================================================
// MACRO SPLIT TESTS
// ============================================================================

#[test]
fn balanced_split_for_empty_goals() {
    let config = &IntelligenceConfig::global().targets;

    // 2556 kcal at 25/45/30: protein 159.75 -> 160, carbs 287.55 -> 288,
    // fat 85.2 -> 85
    let targets = calculate_targets(&base_profile(), config);
    assert_eq!(targets.protein_g, 160);
    assert_eq!(targets.carbs_g, 288);
    assert_eq!(targets.fat_g, 85);
}

#[test]
fn weight_loss_split() {
    let config = &IntelligenceConfig::global().targets;

    // 2019 kcal at 35/35/30: protein 176.66 -> 177, carbs 177, fat 67.3 -> 67
    let profile = UserProfile {
        goals: vec![GoalTag::LoseWeight],
        target_weight: Some(BodyWeight::kg(60.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.protein_g, 177);
    assert_eq!(targets.carbs_g, 177);
    assert_eq!(targets.fat_g, 67);
}

#[test]
fn muscle_gain_split() {
    let config = &IntelligenceConfig::global().targets;

    // 3092 kcal at 30/45/25: protein 231.9 -> 232, carbs 347.85 -> 348,
    // fat 85.88 -> 86
    let profile = UserProfile {
        goals: vec![GoalTag::GainMuscle],
        target_weight: Some(BodyWeight::kg(80.0)),
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.protein_g, 232);
    assert_eq!(targets.carbs_g, 348);
    assert_eq!(targets.fat_g, 86);
}

#[test]
fn endurance_split_selected() {
    let config = &IntelligenceConfig::global().targets;

    let profile = UserProfile {
        goals: vec![GoalTag::ImproveEndurance],
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.split.protein, 0.20);
    assert_eq!(targets.split.carbs, 0.55);
    assert_eq!(targets.split.fat, 0.25);
}

#[test]
fn first_matching_goal_wins_for_split() {
    let config = &IntelligenceConfig::global().targets;

    // Flexibility has no dedicated split, so the second goal decides
    let profile = UserProfile {
        goals: vec![GoalTag::ImproveFlexibility, GoalTag::LoseWeight],
        ..base_profile()
    };
    let targets = calculate_targets(&profile, config);
    assert_eq!(targets.split.protein, 0.35);
}

#[test]
fn macro_energy_approximates_calorie_target() {
    let config = &IntelligenceConfig::global().targets;

    for goals in [
        vec![],
        vec![GoalTag::LoseWeight],
        vec![GoalTag::GainMuscle],
        vec![GoalTag::ImproveEndurance],
    ] {
        let profile = UserProfile {
            goals,
            ..base_profile()
        };
        let t = calculate_targets(&profile, config);
        let energy = t.protein_g * 4 + t.carbs_g * 4 + t.fat_g * 9;
        // Independent rounding keeps the sum near, not at, the target
        assert!(energy.abs_diff(t.calories) <= 10);
    }
}

// ============================================================================
// WATER AND UNIT CONVERSION TESTS
// ============================================================================

#[test]
fn water_target_scales_with_weight() {
    let config = &IntelligenceConfig::global().targets;

    let targets = calculate_targets(&base_profile(), config);
    assert_eq!(targets.water_ml, 2450);
}

#[test]
fn imperial_weight_matches_metric_result() {
    let config = &IntelligenceConfig::global().targets;

    // 70 kg expressed in pounds
    let imperial = UserProfile {
        weight: Some(BodyWeight::lb(154.3234)),
        ..base_profile()
    };
    let metric = calculate_targets(&base_profile(), config);
    let converted = calculate_targets(&imperial, config);
    assert_eq!(metric.bmr, converted.bmr);
    assert_eq!(metric.calories, converted.calories);
}
