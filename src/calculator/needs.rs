//! Daily water and fiber targets

use crate::models::{ActivityLevel, Goal, UserProfile};

/// Base water need in mL per kg of bodyweight
const WATER_ML_PER_KG: f64 = 35.0;
/// Water target when bodyweight is missing or invalid
pub const DEFAULT_WATER_ML: u32 = 2500;
/// Extra water for a cutting goal
const LOSE_WATER_BONUS_ML: f64 = 300.0;

/// Fiber grams per 1000 kcal (dietary guideline baseline)
const FIBER_G_PER_1000_KCAL: f64 = 14.0;

/// Extra water for exercise activity, in mL
fn exercise_water_ml(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 0.0,
        ActivityLevel::Light => 400.0,
        ActivityLevel::Moderate => 600.0,
        ActivityLevel::Active => 800.0,
        ActivityLevel::VeryActive => 1200.0,
    }
}

/// Extra water for occupational activity, in mL
fn occupational_water_ml(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 0.0,
        ActivityLevel::Light => 300.0,
        ActivityLevel::Moderate => 500.0,
        ActivityLevel::Active => 700.0,
        ActivityLevel::VeryActive => 1000.0,
    }
}

/// Extra fiber for exercise activity, in grams
fn exercise_fiber_g(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 0.0,
        ActivityLevel::Light => 2.0,
        ActivityLevel::Moderate => 4.0,
        ActivityLevel::Active => 6.0,
        ActivityLevel::VeryActive => 8.0,
    }
}

/// Calculates the daily water target in mL, rounded to the nearest integer.
///
/// `weight × 35` plus activity add-ons, plus a flat bonus when cutting.
/// Falls back to 2500 mL when bodyweight is missing or invalid.
pub fn calculate_water_needs(profile: &UserProfile) -> u32 {
    if !profile.has_valid_weight() {
        tracing::warn!(
            weight_kg = profile.weight_kg,
            "Invalid weight, water target defaulting to {} mL",
            DEFAULT_WATER_ML
        );
        return DEFAULT_WATER_ML;
    }

    let mut water = profile.weight_kg * WATER_ML_PER_KG
        + exercise_water_ml(profile.exercise_activity)
        + occupational_water_ml(profile.occupational_activity);

    if profile.goal == Goal::Lose {
        water += LOSE_WATER_BONUS_ML;
    }

    water.round() as u32
}

/// Calculates the daily fiber target in grams, rounded to the nearest
/// integer.
///
/// `(calories / 1000) × 14` plus an exercise add-on, scaled down 10% past
/// age 50 and up 20% when cutting.
pub fn calculate_fiber_needs(total_calories: u32, profile: &UserProfile) -> u32 {
    let mut fiber = total_calories as f64 / 1000.0 * FIBER_G_PER_1000_KCAL
        + exercise_fiber_g(profile.exercise_activity);

    if profile.age > 50 {
        fiber *= 0.9;
    }
    if profile.goal == Goal::Lose {
        fiber *= 1.2;
    }

    fiber.round() as u32
}
