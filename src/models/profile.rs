//! User profile model
//!
//! The immutable input to every calculation: age, body measurements,
//! activity levels, and goal. Unrecognized enum values degrade to a
//! documented default at the parse boundary instead of failing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Biological sex, used only to pick the BMR formula constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    /// Unknown values fall back to male; the gender adjustment branches
    /// on "female or not", matching the source behavior. Declared last
    /// because serde requires the `other` variant in that position.
    #[serde(other)]
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl Default for Sex {
    fn default() -> Self {
        Sex::Male
    }
}

/// Activity level, used for both exercise and occupational activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Light,
    Moderate,
    Active,
    VeryActive,
    /// Unknown values fall back to sedentary (neutral multipliers).
    /// Declared last because serde requires the `other` variant in that
    /// position; `all()` carries the intensity ordering.
    #[serde(other)]
    Sedentary,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" | "very active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// All levels in ascending order of intensity
    pub fn all() -> [ActivityLevel; 5] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ]
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Sedentary
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    Gain,
    /// Unknown values fall back to maintain (1.0 multiplier). Declared
    /// last because serde requires the `other` variant in that position.
    #[serde(other)]
    Maintain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lose" => Some(Goal::Lose),
            "maintain" => Some(Goal::Maintain),
            "gain" => Some(Goal::Gain),
            _ => None,
        }
    }

    pub fn all() -> [Goal; 3] {
        [Goal::Lose, Goal::Maintain, Goal::Gain]
    }
}

impl Default for Goal {
    fn default() -> Self {
        Goal::Maintain
    }
}

/// Profile validation error types
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Age must be greater than zero")]
    InvalidAge,

    #[error("Weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),

    #[error("Height must be a positive number of centimeters, got {0}")]
    InvalidHeight(f64),
}

/// A user profile for nutrition calculations
///
/// Numeric fields are validated lazily: the calculator functions degrade to
/// safe defaults on invalid data rather than erroring, and `validate` is
/// available for callers that want to surface problems up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub exercise_activity: ActivityLevel,
    #[serde(default)]
    pub occupational_activity: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl UserProfile {
    /// True when weight is usable for calculations
    pub fn has_valid_weight(&self) -> bool {
        self.weight_kg.is_finite() && self.weight_kg > 0.0
    }

    /// True when height is usable for calculations
    pub fn has_valid_height(&self) -> bool {
        self.height_cm.is_finite() && self.height_cm > 0.0
    }

    /// True when all numeric fields needed for BMR are present and positive
    pub fn has_complete_measurements(&self) -> bool {
        self.age > 0 && self.has_valid_weight() && self.has_valid_height()
    }

    /// Strict validation for callers that want an error instead of defaults
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::InvalidAge);
        }
        if !self.has_valid_weight() {
            return Err(ProfileError::InvalidWeight(self.weight_kg));
        }
        if !self.has_valid_height() {
            return Err(ProfileError::InvalidHeight(self.height_cm));
        }
        Ok(())
    }
}

/// Whole-year age on a given date from a birth date
///
/// Returns 0 if the birth date is on or after the reference date, which the
/// calculator treats as missing data.
pub fn age_from_birth_date(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    if birth_date >= on {
        return 0;
    }

    let mut years = on.year() - birth_date.year();
    // Birthday hasn't happened yet this year
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
