//! Nutrition target output types
//!
//! Derived values only: recomputed on demand from a profile, never stored
//! or cached by this crate.

use serde::{Deserialize, Serialize};

/// Complete daily nutrition targets for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// kcal per day
    pub calories: u32,
    /// grams per day
    pub protein_g: u32,
    /// grams per day
    pub carbs_g: u32,
    /// grams per day
    pub fat_g: u32,
    /// milliliters per day
    pub water_ml: u32,
    /// grams per day
    pub fiber_g: u32,
}

/// Macronutrient grams for a given calorie total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacronutrientTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl MacronutrientTargets {
    /// Total energy implied by the gram amounts (4/4/9 kcal per gram)
    pub fn energy_kcal(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}

/// Macro split as integer percentages of total calories
///
/// Derived from gram amounts; sums to 100 within rounding since the
/// underlying ratios are renormalized before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

impl MacroDistribution {
    /// Percentage split implied by macro gram amounts
    ///
    /// Returns all zeros when the grams carry no energy.
    pub fn from_macros(macros: &MacronutrientTargets) -> Self {
        let total = macros.energy_kcal() as f64;
        if total <= 0.0 {
            return Self {
                protein_pct: 0,
                carbs_pct: 0,
                fat_pct: 0,
            };
        }

        Self {
            protein_pct: ((macros.protein_g * 4) as f64 / total * 100.0).round() as u32,
            carbs_pct: ((macros.carbs_g * 4) as f64 / total * 100.0).round() as u32,
            fat_pct: ((macros.fat_g * 9) as f64 / total * 100.0).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_kcal() {
        let macros = MacronutrientTargets {
            protein_g: 150,
            carbs_g: 250,
            fat_g: 60,
        };
        assert_eq!(macros.energy_kcal(), 150 * 4 + 250 * 4 + 60 * 9);
    }

    #[test]
    fn test_distribution_sums_to_roughly_100() {
        let macros = MacronutrientTargets {
            protein_g: 153,
            carbs_g: 230,
            fat_g: 57,
        };
        let split = MacroDistribution::from_macros(&macros);
        let sum = split.protein_pct + split.carbs_pct + split.fat_pct;
        assert!((99..=101).contains(&sum), "split sums to {}", sum);
    }

    #[test]
    fn test_distribution_of_zero_macros() {
        let macros = MacronutrientTargets {
            protein_g: 0,
            carbs_g: 0,
            fat_g: 0,
        };
        let split = MacroDistribution::from_macros(&macros);
        assert_eq!(split.protein_pct, 0);
        assert_eq!(split.carbs_pct, 0);
        assert_eq!(split.fat_pct, 0);
    }
}
