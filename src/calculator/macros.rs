//! Macronutrient distribution
//!
//! Splits a calorie total into protein/carb/fat grams using a hand-tuned
//! ratio table keyed by combined activity level and goal, with
//! minimum-protein enforcement, activity-specific shifts, and a final
//! renormalization before converting to grams.

use crate::models::{ActivityLevel, Goal, MacronutrientTargets, UserProfile};

/// kcal per gram of protein and carbohydrate (Atwater factor)
pub const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;
/// kcal per gram of fat (Atwater factor)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Carb ratio floor when carving out protein deficit
const PROTEIN_CARVE_CARBS_FLOOR: f64 = 0.40;
/// Fat ratio floor, shared by protein carve-out and the very-active shift
const FAT_FLOOR: f64 = 0.15;
/// Carb ratio cap for the very-active shift
const VERY_ACTIVE_CARBS_CAP: f64 = 0.65;
/// Carb ratio floor for the sedentary shift
const SEDENTARY_CARBS_FLOOR: f64 = 0.30;
/// Fat ratio cap for the sedentary shift
const SEDENTARY_FAT_CAP: f64 = 0.40;

/// Fractional macro split, summing to 1.0 after renormalization
#[derive(Debug, Clone, Copy)]
struct MacroRatios {
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl MacroRatios {
    const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Combined activity level used only to select the macro-ratio table
///
/// Literal override rules from the source; they are heuristic and kept
/// exactly as stated rather than generalized.
pub fn combined_activity_level(
    occupational: ActivityLevel,
    exercise: ActivityLevel,
) -> ActivityLevel {
    match (occupational, exercise) {
        (ActivityLevel::VeryActive, ActivityLevel::Sedentary) => ActivityLevel::Moderate,
        (ActivityLevel::Active, ActivityLevel::Light) => ActivityLevel::Moderate,
        (ActivityLevel::VeryActive, ActivityLevel::Active) => ActivityLevel::VeryActive,
        (_, exercise) => exercise,
    }
}

/// Minimum protein in grams per kg of bodyweight by combined activity level
pub fn min_protein_per_kg(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.4,
        ActivityLevel::Moderate => 1.6,
        ActivityLevel::Active => 1.8,
        ActivityLevel::VeryActive => 2.0,
    }
}

/// Hand-tuned base ratios (protein/carbs/fat) per combined activity × goal
///
/// Exhaustive over both enums, so every one of the 15 cells is covered at
/// compile time.
fn base_ratios(activity: ActivityLevel, goal: Goal) -> MacroRatios {
    use ActivityLevel::*;
    use Goal::*;

    match (activity, goal) {
        (Sedentary, Lose) => MacroRatios::new(0.35, 0.35, 0.30),
        (Sedentary, Maintain) => MacroRatios::new(0.25, 0.40, 0.35),
        (Sedentary, Gain) => MacroRatios::new(0.25, 0.45, 0.30),
        (Light, Lose) => MacroRatios::new(0.30, 0.40, 0.30),
        (Light, Maintain) => MacroRatios::new(0.25, 0.45, 0.30),
        (Light, Gain) => MacroRatios::new(0.25, 0.50, 0.25),
        (Moderate, Lose) => MacroRatios::new(0.30, 0.45, 0.25),
        (Moderate, Maintain) => MacroRatios::new(0.25, 0.50, 0.25),
        (Moderate, Gain) => MacroRatios::new(0.25, 0.55, 0.20),
        (Active, Lose) => MacroRatios::new(0.35, 0.45, 0.20),
        (Active, Maintain) => MacroRatios::new(0.30, 0.50, 0.20),
        (Active, Gain) => MacroRatios::new(0.25, 0.60, 0.15),
        (VeryActive, Lose) => MacroRatios::new(0.40, 0.45, 0.15),
        (VeryActive, Maintain) => MacroRatios::new(0.30, 0.55, 0.15),
        (VeryActive, Gain) => MacroRatios::new(0.25, 0.65, 0.10),
    }
}

/// Raises the protein ratio to the given minimum, carving the deficit out of
/// carbs first (down to 0.40) and then fat (down to 0.15)
fn enforce_minimum_protein(mut ratios: MacroRatios, min_protein_ratio: f64) -> MacroRatios {
    if !min_protein_ratio.is_finite() || ratios.protein >= min_protein_ratio {
        return ratios;
    }

    let mut deficit = min_protein_ratio - ratios.protein;
    ratios.protein = min_protein_ratio;

    let from_carbs = (ratios.carbs - PROTEIN_CARVE_CARBS_FLOOR).max(0.0).min(deficit);
    ratios.carbs -= from_carbs;
    deficit -= from_carbs;

    let from_fat = (ratios.fat - FAT_FLOOR).max(0.0).min(deficit);
    ratios.fat -= from_fat;

    // Any residual deficit leaves the sum above 1.0; renormalization below
    // scales it back.
    ratios
}

/// Activity-specific secondary shift between carbs and fat
///
/// Very active non-cut profiles get more carbs at fat's expense; sedentary
/// non-bulk profiles the reverse. Caps and floors apply independently, any
/// drift is handled by renormalization.
fn apply_activity_shift(mut ratios: MacroRatios, activity: ActivityLevel, goal: Goal) -> MacroRatios {
    if activity == ActivityLevel::VeryActive && goal != Goal::Lose {
        ratios.carbs = (ratios.carbs + 0.05).min(VERY_ACTIVE_CARBS_CAP);
        ratios.fat = (ratios.fat - 0.05).max(FAT_FLOOR);
    } else if activity == ActivityLevel::Sedentary && goal != Goal::Gain {
        ratios.carbs = (ratios.carbs - 0.05).max(SEDENTARY_CARBS_FLOOR);
        ratios.fat = (ratios.fat + 0.05).min(SEDENTARY_FAT_CAP);
    }
    ratios
}

/// Scales the three ratios so they sum to exactly 1.0
fn renormalize(mut ratios: MacroRatios) -> MacroRatios {
    let sum = ratios.sum();
    if sum > 0.0 {
        ratios.protein /= sum;
        ratios.carbs /= sum;
        ratios.fat /= sum;
    }
    ratios
}

/// Splits a calorie total into macronutrient grams for a profile.
///
/// Ratio math stays floating point throughout; only the final gram amounts
/// are rounded. A zero calorie total yields all-zero grams.
pub fn calculate_macronutrients(
    total_calories: u32,
    profile: &UserProfile,
) -> MacronutrientTargets {
    if total_calories == 0 {
        return MacronutrientTargets {
            protein_g: 0,
            carbs_g: 0,
            fat_g: 0,
        };
    }

    let combined = combined_activity_level(profile.occupational_activity, profile.exercise_activity);
    let mut ratios = base_ratios(combined, profile.goal);

    // Minimum protein only applies when bodyweight is usable
    if profile.has_valid_weight() {
        let min_protein_g = profile.weight_kg * min_protein_per_kg(combined);
        let min_protein_ratio = min_protein_g * KCAL_PER_G_PROTEIN_CARB / total_calories as f64;
        ratios = enforce_minimum_protein(ratios, min_protein_ratio);
    }

    ratios = apply_activity_shift(ratios, combined, profile.goal);
    ratios = renormalize(ratios);

    let calories = total_calories as f64;
    MacronutrientTargets {
        protein_g: (calories * ratios.protein / KCAL_PER_G_PROTEIN_CARB).round() as u32,
        carbs_g: (calories * ratios.carbs / KCAL_PER_G_PROTEIN_CARB).round() as u32,
        fat_g: (calories * ratios.fat / KCAL_PER_G_FAT).round() as u32,
    }
}
