//! Aggregate nutrition target calculation
//!
//! The single entry point for normal use; the individual calculations stay
//! independently callable and pure.

use crate::calculator::energy::calculate_total_calories;
use crate::calculator::macros::calculate_macronutrients;
use crate::calculator::needs::{calculate_fiber_needs, calculate_water_needs};
use crate::models::{NutritionTargets, UserProfile};

/// Computes the full set of daily nutrition targets for a profile.
///
/// Order matters only in that macros and fiber derive from the calorie
/// total; every step is a pure function of the profile, so identical
/// profiles always produce identical targets.
pub fn calculate_nutrition_targets(profile: &UserProfile) -> NutritionTargets {
    let calories = calculate_total_calories(profile);
    let macros = calculate_macronutrients(calories, profile);
    let water_ml = calculate_water_needs(profile);
    let fiber_g = calculate_fiber_needs(calories, profile);

    let targets = NutritionTargets {
        calories,
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
        water_ml,
        fiber_g,
    };

    tracing::debug!(
        calories = targets.calories,
        protein_g = targets.protein_g,
        carbs_g = targets.carbs_g,
        fat_g = targets.fat_g,
        water_ml = targets.water_ml,
        fiber_g = targets.fiber_g,
        "Calculated nutrition targets"
    );

    targets
}
