use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile snapshot for the pet being scored. Every field is optional;
/// missing data degrades the score to a neutral estimate, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_neutered: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub weight_kg: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineRecord {
    /// Free-text vaccine name, classified by keyword match.
    pub name: String,
    pub date_given: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetVisitRecord {
    pub visit_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroomingRecord {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdventureRecord {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub daily_grams: Option<f64>,
    #[serde(default)]
    pub bag_size: Option<f64>,
    #[serde(default)]
    pub bag_unit: Option<String>,
    #[serde(default)]
    pub food_type: Option<String>,
}

/// Fully materialized input for one scoring call. Record collections are
/// supplied sorted newest-first by the caller; the engine does not re-sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub pet: PetProfile,
    #[serde(default)]
    pub weight_records: Vec<WeightRecord>,
    #[serde(default)]
    pub vaccines: Vec<VaccineRecord>,
    #[serde(default)]
    pub vet_visits: Vec<VetVisitRecord>,
    #[serde(default)]
    pub groomings: Vec<GroomingRecord>,
    #[serde(default)]
    pub adventures: Vec<AdventureRecord>,
    #[serde(default)]
    pub foods: Vec<FoodRecord>,
}

impl ScoreInput {
    /// Most recent known weight: the newest weight record, falling back to
    /// the profile snapshot. Zero and negative values count as unknown.
    pub(crate) fn latest_weight_kg(&self) -> Option<f64> {
        self.weight_records
            .first()
            .map(|record| record.weight_kg)
            .or(self.pet.weight_kg)
            .filter(|kg| *kg > 0.0)
    }
}

/// Qualitative bucket for the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    Attention,
    Building,
}

/// How much real (non-estimated) data backs the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSufficiency {
    Ready,
    Building,
    TooEarly,
}

/// Display priority for advisory flags. The derived ordering is the render
/// order: suggestions first, then reminders, then tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Suggestion,
    Reminder,
    Tip,
}

impl FlagSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suggestion => "Suggestion",
            Self::Reminder => "Reminder",
            Self::Tip => "Tip",
        }
    }
}

/// One of the five 20-point health dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub name: &'static str,
    pub emoji: &'static str,
    pub score: u8,
    pub max: u8,
    pub pct: u8,
    pub status: String,
    /// At most two suggestions, always phrased as help rather than alarm.
    pub tips: Vec<String>,
    /// True when the pillar had no real data and returned a neutral default.
    pub is_estimated: bool,
}

/// Advisory message surfaced next to the score. Never diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFlag {
    pub id: &'static str,
    pub severity: FlagSeverity,
    pub message: String,
    pub action: &'static str,
    pub href: &'static str,
}

/// Composite scoring result, pre-clamped and render-ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalityScoreResult {
    pub total: u8,
    pub category: ScoreCategory,
    pub color: &'static str,
    pub headline: &'static str,
    pub subline: String,
    pub pillars: Vec<PillarScore>,
    pub flags: Vec<ScoreFlag>,
    pub data_sufficiency: DataSufficiency,
    pub pillars_with_data: u8,
    pub missing_data_count: u8,
    pub age_years: Option<i32>,
    pub is_senior: bool,
}
