//! Nutrition calculation module
//!
//! Pure functions over a user profile: BMR, total daily calories,
//! macronutrient grams, water and fiber targets, plus diagnostic helpers.

pub mod bmr;
pub mod details;
pub mod energy;
pub mod macros;
pub mod needs;
pub mod recommendations;
pub mod targets;

pub use bmr::{calculate_bmr, BmrFormula};
pub use details::{calculation_details, CalculationDetails};
pub use energy::{
    activity_correction, calculate_total_calories, exercise_multiplier, goal_multiplier,
    occupational_multiplier,
};
pub use macros::{calculate_macronutrients, combined_activity_level, min_protein_per_kg};
pub use needs::{calculate_fiber_needs, calculate_water_needs, DEFAULT_WATER_ML};
pub use recommendations::{recommendations_for, ActivityRecommendation};
pub use targets::calculate_nutrition_targets;
