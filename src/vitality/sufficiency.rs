use super::breeds::is_known_breed;
use super::domain::{DataSufficiency, ScoreInput};

/// How the five data-presence checks classified one input bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SufficiencyReport {
    pub sufficiency: DataSufficiency,
    pub pillars_with_data: u8,
    pub missing_data_count: u8,
}

/// Counts how many of the five data categories have real records, so the
/// renderer can show "collecting data" instead of a misleading low score.
pub(crate) fn evaluate_sufficiency(input: &ScoreInput) -> SufficiencyReport {
    let has_weight = input.latest_weight_kg().is_some();
    let has_preventive = !input.vaccines.is_empty() || !input.vet_visits.is_empty();
    let has_breed_or_age =
        is_known_breed(input.pet.breed.as_deref()) || input.pet.birth_date.is_some();
    let has_activity = !input.adventures.is_empty() || !input.groomings.is_empty();
    let has_food = !input.foods.is_empty();

    let checks = [
        has_weight,
        has_preventive,
        has_breed_or_age,
        has_activity,
        has_food,
    ];
    let with_data = checks.iter().filter(|present| **present).count() as u8;
    let missing = checks.len() as u8 - with_data;

    let sufficiency = if with_data >= 4 {
        DataSufficiency::Ready
    } else if with_data >= 2 {
        DataSufficiency::Building
    } else {
        DataSufficiency::TooEarly
    };

    SufficiencyReport {
        sufficiency,
        pillars_with_data: with_data,
        missing_data_count: missing,
    }
}
