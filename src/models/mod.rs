//! Data models
//!
//! Rust structs representing calculation inputs and outputs.

mod profile;
mod targets;

pub use profile::{age_from_birth_date, ActivityLevel, Goal, ProfileError, Sex, UserProfile};
pub use targets::{MacroDistribution, MacronutrientTargets, NutritionTargets};
