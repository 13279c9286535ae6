//! Nutrition Target Calculation Engine
//!
//! Pure functions for computing daily nutrition targets (calories,
//! macronutrients, water, fiber) from a user profile.

pub mod calculator;
pub mod models;

pub use calculator::{
    calculate_bmr, calculate_fiber_needs, calculate_macronutrients, calculate_nutrition_targets,
    calculate_total_calories, calculate_water_needs, calculation_details, recommendations_for,
    BmrFormula,
};
pub use models::{
    ActivityLevel, Goal, MacroDistribution, MacronutrientTargets, NutritionTargets, ProfileError,
    Sex, UserProfile,
};
