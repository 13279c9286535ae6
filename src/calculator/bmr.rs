//! Basal Metabolic Rate calculation
//!
//! Two interchangeable formulas. Mifflin-St Jeor is the canonical one used
//! by all downstream calculations; Harris-Benedict (revised) is kept for
//! side-by-side display.

use serde::{Deserialize, Serialize};

use crate::models::{Sex, UserProfile};

/// BMR formula selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BmrFormula {
    HarrisBenedict,
    /// Unknown values fall back to Mifflin-St Jeor, the canonical formula.
    #[serde(other)]
    Mifflin,
}

impl BmrFormula {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmrFormula::HarrisBenedict => "harris-benedict",
            BmrFormula::Mifflin => "mifflin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "harris-benedict" | "harris_benedict" => Some(BmrFormula::HarrisBenedict),
            "mifflin" | "mifflin-st-jeor" => Some(BmrFormula::Mifflin),
            _ => None,
        }
    }
}

impl Default for BmrFormula {
    fn default() -> Self {
        BmrFormula::Mifflin
    }
}

/// Calculates basal metabolic rate in kcal/day, rounded to the nearest
/// integer.
///
/// Harris-Benedict (revised):
/// - female: `655.1 + 9.563·weight + 1.850·height − 4.676·age`
/// - male: `66.5 + 13.75·weight + 5.003·height − 6.75·age`
///
/// Mifflin-St Jeor:
/// - `10·weight + 6.25·height − 5·age + adj` (adj = −161 female, +5 male)
///
/// Returns `0` when weight, height, or age is missing/zero/non-finite.
/// Callers must treat `0` as "insufficient data", not a valid BMR.
pub fn calculate_bmr(profile: &UserProfile, formula: BmrFormula) -> u32 {
    if !profile.has_complete_measurements() {
        tracing::warn!(
            age = profile.age,
            weight_kg = profile.weight_kg,
            height_cm = profile.height_cm,
            "Incomplete measurements, BMR defaulting to 0"
        );
        return 0;
    }

    let weight = profile.weight_kg;
    let height = profile.height_cm;
    let age = profile.age as f64;

    let bmr = match formula {
        BmrFormula::HarrisBenedict => match profile.sex {
            Sex::Female => 655.1 + 9.563 * weight + 1.850 * height - 4.676 * age,
            Sex::Male => 66.5 + 13.75 * weight + 5.003 * height - 6.75 * age,
        },
        BmrFormula::Mifflin => {
            let gender_adjustment = match profile.sex {
                Sex::Female => -161.0,
                Sex::Male => 5.0,
            };
            10.0 * weight + 6.25 * height - 5.0 * age + gender_adjustment
        }
    };

    bmr.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal};

    fn profile(age: u32, weight_kg: f64, height_cm: f64, sex: Sex) -> UserProfile {
        UserProfile {
            age,
            weight_kg,
            height_cm,
            sex,
            exercise_activity: ActivityLevel::Moderate,
            occupational_activity: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_mifflin_male() {
        // 10×70 + 6.25×175 − 5×30 + 5 = 1648.75 -> 1649
        let bmr = calculate_bmr(&profile(30, 70.0, 175.0, Sex::Male), BmrFormula::Mifflin);
        assert_eq!(bmr, 1649);
    }

    #[test]
    fn test_mifflin_female() {
        // 10×70 + 6.25×175 − 5×30 − 161 = 1482.75 -> 1483
        let bmr = calculate_bmr(&profile(30, 70.0, 175.0, Sex::Female), BmrFormula::Mifflin);
        assert_eq!(bmr, 1483);
    }

    #[test]
    fn test_harris_benedict_male() {
        // 66.5 + 13.75×70 + 5.003×175 − 6.75×30 = 1702.025 -> 1702
        let bmr = calculate_bmr(
            &profile(30, 70.0, 175.0, Sex::Male),
            BmrFormula::HarrisBenedict,
        );
        assert_eq!(bmr, 1702);
    }

    #[test]
    fn test_harris_benedict_female() {
        // 655.1 + 9.563×70 + 1.850×175 − 4.676×30 = 1507.98 -> 1508
        let bmr = calculate_bmr(
            &profile(30, 70.0, 175.0, Sex::Female),
            BmrFormula::HarrisBenedict,
        );
        assert_eq!(bmr, 1508);
    }

    #[test]
    fn test_zero_age_returns_zero() {
        assert_eq!(
            calculate_bmr(&profile(0, 70.0, 175.0, Sex::Male), BmrFormula::Mifflin),
            0
        );
    }

    #[test]
    fn test_invalid_weight_returns_zero() {
        for weight in [0.0, -70.0, f64::NAN, f64::INFINITY] {
            for formula in [BmrFormula::Mifflin, BmrFormula::HarrisBenedict] {
                assert_eq!(
                    calculate_bmr(&profile(30, weight, 175.0, Sex::Male), formula),
                    0,
                    "weight {} should yield BMR 0",
                    weight
                );
            }
        }
    }

    #[test]
    fn test_invalid_height_returns_zero() {
        assert_eq!(
            calculate_bmr(&profile(30, 70.0, 0.0, Sex::Male), BmrFormula::Mifflin),
            0
        );
        assert_eq!(
            calculate_bmr(&profile(30, 70.0, f64::NAN, Sex::Male), BmrFormula::Mifflin),
            0
        );
    }

    #[test]
    fn test_positive_for_valid_profiles() {
        for sex in [Sex::Male, Sex::Female] {
            for formula in [BmrFormula::Mifflin, BmrFormula::HarrisBenedict] {
                assert!(calculate_bmr(&profile(45, 60.0, 160.0, sex), formula) > 0);
            }
        }
    }

    #[test]
    fn test_formula_from_str() {
        assert_eq!(
            BmrFormula::from_str("harris-benedict"),
            Some(BmrFormula::HarrisBenedict)
        );
        assert_eq!(BmrFormula::from_str("mifflin"), Some(BmrFormula::Mifflin));
        assert_eq!(BmrFormula::from_str("katch-mcardle"), None);
    }
}
