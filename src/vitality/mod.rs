//! The Vitality Score engine: a deterministic, side-effect-free scoring
//! function over a pet's profile and health-record history.
//!
//! Five independent pillar scorers each contribute 0-20 points; the
//! aggregator sums them, applies a data-sufficiency cap, and maps the total
//! to a category, color, and headline. The engine never raises an error and
//! never produces alarming copy: sparse input degrades to a neutral
//! "building profile" state instead.

pub mod breeds;
pub mod domain;
mod flags;
mod pillars;
mod sufficiency;
mod support;

pub use domain::{
    AdventureRecord, DataSufficiency, FlagSeverity, FoodRecord, GroomingRecord, PetProfile,
    PillarScore, ScoreCategory, ScoreFlag, ScoreInput, VaccineRecord, VetVisitRecord,
    VitalityScoreResult, WeightRecord,
};

use chrono::NaiveDate;
use flags::build_flags;
use pillars::{score_activity, score_breed_age, score_nutrition, score_preventive, score_weight};
use std::time::{SystemTime, UNIX_EPOCH};
use sufficiency::evaluate_sufficiency;
use support::age_in_years;

/// Scores below this sufficiency-capped ceiling are all a near-empty
/// profile is allowed to show.
const TOO_EARLY_CAP: u8 = 55;

struct CategoryBand {
    min: u8,
    category: ScoreCategory,
    color: &'static str,
    headline: &'static str,
    sublines: &'static [&'static str],
}

/// Ordered by descending minimum; first match wins.
const CATEGORY_BANDS: &[CategoryBand] = &[
    CategoryBand {
        min: 85,
        category: ScoreCategory::Excellent,
        color: "#22c55e",
        headline: "In excellent shape",
        sublines: &[
            "Everything points to a very good state of health",
            "Keep it up, you are doing great",
        ],
    },
    CategoryBand {
        min: 70,
        category: ScoreCategory::Good,
        color: "#7CB974",
        headline: "Very good condition",
        sublines: &[
            "There are small opportunities to improve",
            "A couple of adjustments and we reach the top",
        ],
    },
    CategoryBand {
        min: 55,
        category: ScoreCategory::Fair,
        color: "#F59E0B",
        headline: "A good start",
        sublines: &[
            "Complete more records for a more precise analysis",
            "Every piece of data you add improves the score",
        ],
    },
    CategoryBand {
        min: 40,
        category: ScoreCategory::Fair,
        color: "#F97316",
        headline: "Profile under construction",
        sublines: &[
            "Some data is still missing for a full analysis",
            "Start by recording weight and vaccines",
        ],
    },
    CategoryBand {
        min: 0,
        category: ScoreCategory::Building,
        color: "#94A3B8",
        headline: "Starting the health history",
        sublines: &[
            "Add more data to see the full Vitality Score",
            "The more records, the more precise the analysis",
        ],
    },
];

fn ambient_pick(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len.max(1)
}

/// Stateless scorer. Holds only the subline picker, which exists so tests
/// can pin the one non-deterministic choice the engine makes.
pub struct VitalityScoreEngine {
    pick_subline: fn(usize) -> usize,
}

impl Default for VitalityScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalityScoreEngine {
    pub fn new() -> Self {
        Self {
            pick_subline: ambient_pick,
        }
    }

    /// Replaces the subline picker; `pick` receives the candidate count and
    /// returns an index (taken modulo the count).
    pub fn with_subline_picker(pick: fn(usize) -> usize) -> Self {
        Self { pick_subline: pick }
    }

    /// Computes the full Vitality Score for one input bundle, evaluated at
    /// `today`. Pure apart from the subline choice: identical input and
    /// date always produce identical scores, pillars, and flags.
    pub fn score(&self, input: &ScoreInput, today: NaiveDate) -> VitalityScoreResult {
        let pillars = vec![
            score_weight(input, today),
            score_preventive(input, today),
            score_breed_age(input, today),
            score_activity(input, today),
            score_nutrition(input, today),
        ];

        let report = evaluate_sufficiency(input);
        let raw_total: u8 = pillars
            .iter()
            .map(|pillar| i32::from(pillar.score))
            .sum::<i32>()
            .clamp(0, 100) as u8;

        // Never show a confident-looking number on a near-empty profile.
        let total = if report.sufficiency == DataSufficiency::TooEarly {
            raw_total.min(TOO_EARLY_CAP)
        } else {
            raw_total
        };

        let band = CATEGORY_BANDS
            .iter()
            .find(|band| total >= band.min)
            .unwrap_or(&CATEGORY_BANDS[CATEGORY_BANDS.len() - 1]);

        let subline = match report.sufficiency {
            DataSufficiency::TooEarly => "Add more data to see the full analysis".to_string(),
            DataSufficiency::Building => format!(
                "Score based on {} of 5 areas ({} pending)",
                report.pillars_with_data, report.missing_data_count
            ),
            DataSufficiency::Ready => {
                let index = (self.pick_subline)(band.sublines.len()) % band.sublines.len();
                band.sublines[index].to_string()
            }
        };

        let age_years = age_in_years(input.pet.birth_date, today);
        let is_senior = age_years
            .map(|age| breeds::breed_profile(input.pet.breed.as_deref()).is_senior(age))
            .unwrap_or(false);

        VitalityScoreResult {
            total,
            category: band.category,
            color: band.color,
            headline: band.headline,
            subline,
            pillars,
            flags: build_flags(input, today),
            data_sufficiency: report.sufficiency,
            pillars_with_data: report.pillars_with_data,
            missing_data_count: report.missing_data_count,
            age_years,
            is_senior,
        }
    }
}
