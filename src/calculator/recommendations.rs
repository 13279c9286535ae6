//! Static activity-level recommendations
//!
//! Textual guidance for UI display, looked up per activity level.

use serde::Serialize;

use crate::models::ActivityLevel;

/// Textual guidance for one activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityRecommendation {
    pub level: ActivityLevel,
    pub summary: &'static str,
    pub training: &'static str,
    pub nutrition: &'static str,
}

/// Looks up the static recommendation text for an activity level.
pub fn recommendations_for(level: ActivityLevel) -> ActivityRecommendation {
    match level {
        ActivityLevel::Sedentary => ActivityRecommendation {
            level,
            summary: "Little to no regular exercise",
            training: "Start with 2-3 short walks per week and build toward 150 minutes of light activity",
            nutrition: "Keep portions moderate; protein at each meal helps preserve lean mass",
        },
        ActivityLevel::Light => ActivityRecommendation {
            level,
            summary: "Light exercise 1-3 days per week",
            training: "Add one or two resistance sessions to complement cardio",
            nutrition: "A balanced split works well; prioritize whole-food carbohydrates around workouts",
        },
        ActivityLevel::Moderate => ActivityRecommendation {
            level,
            summary: "Moderate exercise 3-5 days per week",
            training: "Alternate strength and conditioning days with at least one full rest day",
            nutrition: "Time carbohydrates before and after training; spread protein evenly across meals",
        },
        ActivityLevel::Active => ActivityRecommendation {
            level,
            summary: "Hard exercise 6-7 days per week",
            training: "Program deload weeks every 4-6 weeks to manage accumulated fatigue",
            nutrition: "Higher carbohydrate intake supports training volume; do not skimp on post-workout meals",
        },
        ActivityLevel::VeryActive => ActivityRecommendation {
            level,
            summary: "Very hard daily exercise or a physical job plus training",
            training: "Recovery is the limiting factor: sleep, mobility work, and planned easy days",
            nutrition: "Carbohydrate needs are high; hydrate aggressively and consider intra-workout fueling",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_text() {
        for level in ActivityLevel::all() {
            let rec = recommendations_for(level);
            assert_eq!(rec.level, level);
            assert!(!rec.summary.is_empty());
            assert!(!rec.training.is_empty());
            assert!(!rec.nutrition.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_static() {
        assert_eq!(
            recommendations_for(ActivityLevel::Moderate),
            recommendations_for(ActivityLevel::Moderate)
        );
    }
}
