//! Total daily calorie calculation
//!
//! Scales the Mifflin-St Jeor BMR by exercise activity, occupational
//! activity, goal, and a combined-activity correction factor. All multiplier
//! tables are exhaustive matches over the enums so every cell is covered.

use crate::calculator::bmr::{calculate_bmr, BmrFormula};
use crate::models::{ActivityLevel, Goal, UserProfile};

/// Exercise activity multiplier (standard TDEE scale)
pub fn exercise_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Occupational activity multiplier
///
/// A secondary multiplicative adjustment with a deliberately smaller range
/// than the exercise scale; daily work activity is not a second full
/// activity multiplier.
pub fn occupational_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.0,
        ActivityLevel::Light => 1.1,
        ActivityLevel::Moderate => 1.2,
        ActivityLevel::Active => 1.3,
        ActivityLevel::VeryActive => 1.4,
    }
}

/// Goal multiplier applied to the activity-adjusted BMR
pub fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.8,
        Goal::Maintain => 1.0,
        Goal::Gain => 1.2,
    }
}

/// Correction factor for when both activity scales are extreme
///
/// Dampens double-counting when both scales max out, and slightly boosts the
/// desk worker who trains hard (the occupational multiplier alone
/// undercounts that case).
pub fn activity_correction(occupational: ActivityLevel, exercise: ActivityLevel) -> f64 {
    if occupational == ActivityLevel::VeryActive && exercise == ActivityLevel::VeryActive {
        0.95
    } else if occupational == ActivityLevel::Sedentary
        && matches!(exercise, ActivityLevel::Active | ActivityLevel::VeryActive)
    {
        1.05
    } else {
        1.0
    }
}

/// Calculates total daily calories for a profile, rounded to the nearest
/// kcal.
///
/// The rounded Mifflin-St Jeor BMR feeds the product; intermediate
/// multipliers stay floating point until the final round. Returns `0` when
/// the BMR is 0 (insufficient profile data).
pub fn calculate_total_calories(profile: &UserProfile) -> u32 {
    let bmr = calculate_bmr(profile, BmrFormula::Mifflin);
    if bmr == 0 {
        return 0;
    }

    let total = bmr as f64
        * exercise_multiplier(profile.exercise_activity)
        * occupational_multiplier(profile.occupational_activity)
        * goal_multiplier(profile.goal)
        * activity_correction(profile.occupational_activity, profile.exercise_activity);

    total.round() as u32
}
