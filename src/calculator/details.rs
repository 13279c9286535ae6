//! Diagnostic calculation breakdown
//!
//! Convenience wrapper for UI display: both BMR formulas side by side, every
//! multiplier that fed the calorie total, and the resulting targets with a
//! percentage macro split. Carries no computation logic of its own.

use serde::Serialize;

use crate::calculator::bmr::{calculate_bmr, BmrFormula};
use crate::calculator::energy::{
    activity_correction, calculate_total_calories, exercise_multiplier, goal_multiplier,
    occupational_multiplier,
};
use crate::calculator::macros::{calculate_macronutrients, combined_activity_level};
use crate::calculator::needs::{calculate_fiber_needs, calculate_water_needs};
use crate::models::{ActivityLevel, MacroDistribution, MacronutrientTargets, UserProfile};

/// Human-readable breakdown of a full target calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationDetails {
    pub bmr_mifflin: u32,
    pub bmr_harris_benedict: u32,
    pub exercise_multiplier: f64,
    pub occupational_multiplier: f64,
    pub goal_multiplier: f64,
    pub activity_correction: f64,
    pub combined_activity: ActivityLevel,
    pub total_calories: u32,
    pub macros: MacronutrientTargets,
    pub macro_split: MacroDistribution,
    pub water_ml: u32,
    pub fiber_g: u32,
}

/// Builds the full diagnostic breakdown for a profile.
pub fn calculation_details(profile: &UserProfile) -> CalculationDetails {
    let total_calories = calculate_total_calories(profile);
    let macros = calculate_macronutrients(total_calories, profile);

    CalculationDetails {
        bmr_mifflin: calculate_bmr(profile, BmrFormula::Mifflin),
        bmr_harris_benedict: calculate_bmr(profile, BmrFormula::HarrisBenedict),
        exercise_multiplier: exercise_multiplier(profile.exercise_activity),
        occupational_multiplier: occupational_multiplier(profile.occupational_activity),
        goal_multiplier: goal_multiplier(profile.goal),
        activity_correction: activity_correction(
            profile.occupational_activity,
            profile.exercise_activity,
        ),
        combined_activity: combined_activity_level(
            profile.occupational_activity,
            profile.exercise_activity,
        ),
        total_calories,
        macro_split: MacroDistribution::from_macros(&macros),
        macros,
        water_ml: calculate_water_needs(profile),
        fiber_g: calculate_fiber_needs(total_calories, profile),
    }
}
