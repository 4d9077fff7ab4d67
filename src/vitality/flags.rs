use super::breeds::{breed_profile, HealthRisk, RiskLevel};
use super::domain::{FlagSeverity, ScoreFlag, ScoreInput};
use super::support::{age_in_years, days_between, NO_RECORD_DAYS};
use chrono::NaiveDate;

/// Most flags shown at once; anything past this is noise, not help.
const MAX_FLAGS: usize = 4;

/// Weight must sit this far past the breed maximum before the engine says
/// anything at all about it.
const WEIGHT_FLAG_FACTOR: f64 = 1.08;

/// Builds the advisory flag list: at most four entries, suggestions first.
/// Every message is phrased as support; nothing here diagnoses or alarms.
pub(crate) fn build_flags(input: &ScoreInput, today: NaiveDate) -> Vec<ScoreFlag> {
    let breed = breed_profile(input.pet.breed.as_deref());
    let age = age_in_years(input.pet.birth_date, today);
    let mut flags: Vec<ScoreFlag> = Vec::new();

    if let Some(latest) = input.latest_weight_kg() {
        if latest > breed.ideal_weight_kg_max * WEIGHT_FLAG_FACTOR {
            let previous = input.weight_records.get(1).map(|record| record.weight_kg);
            let gaining = previous.is_some_and(|prev| latest > prev);
            flags.push(ScoreFlag {
                id: "weight_check",
                severity: if gaining {
                    FlagSeverity::Suggestion
                } else {
                    FlagSeverity::Tip
                },
                message: if gaining {
                    format!(
                        "Weight is increasing gradually ({latest} kg); adjusting the diet may be worthwhile"
                    )
                } else {
                    format!(
                        "Weight is a little above the ideal range for {}",
                        breed.display_name
                    )
                },
                action: "See weight history",
                href: "/health/weight",
            });
        }
    }

    // Vet reminder only nags people who already track visits.
    if let Some(visit) = input.vet_visits.first() {
        if days_between(visit.visit_date, today) > 425 {
            flags.push(ScoreFlag {
                id: "vet_reminder",
                severity: FlagSeverity::Reminder,
                message: "More than a year has passed since the last recorded vet visit"
                    .to_string(),
                action: "Book a routine checkup",
                href: "/health/history",
            });
        }
    }

    if !input.vaccines.is_empty() {
        let any_recent = input
            .vaccines
            .iter()
            .any(|vaccine| days_between(vaccine.date_given, today) < 365);
        if !any_recent {
            flags.push(ScoreFlag {
                id: "vaccine_check",
                severity: FlagSeverity::Tip,
                message: "The recorded vaccines may be coming up for renewal".to_string(),
                action: "Review the vaccination schedule",
                href: "/health/vaccines",
            });
        }
    }

    if let Some(age) = age {
        if age >= 2 {
            let dental_breed = matches!(breed.dental_risk, RiskLevel::High | RiskLevel::VeryHigh)
                || breed.has_risk(HealthRisk::DentalDisease)
                || breed.has_risk(HealthRisk::BrachycephalicSyndrome);
            let grooming_days = input
                .groomings
                .first()
                .map(|record| days_between(record.date, today))
                .unwrap_or(NO_RECORD_DAYS);
            if dental_breed && grooming_days > 75 {
                flags.push(ScoreFlag {
                    id: "dental_tip",
                    severity: FlagSeverity::Tip,
                    message:
                        "Dental health is especially important in this breed; periodic cleaning recommended"
                            .to_string(),
                    action: "See grooming records",
                    href: "/health/grooming",
                });
            }
        }
    }

    if breed.cardiac_risk == RiskLevel::VeryHigh && age.is_some_and(|age| age >= 6) {
        let last_visit_days = input
            .vet_visits
            .first()
            .map(|visit| days_between(visit.visit_date, today))
            .unwrap_or(NO_RECORD_DAYS);
        if last_visit_days > 365 {
            flags.push(ScoreFlag {
                id: "cardiac_tip",
                severity: FlagSeverity::Suggestion,
                message: format!(
                    "For {}, cardiac monitoring is recommended from age 5-6",
                    breed.display_name
                ),
                action: "Mention it to the veterinarian",
                href: "/health/history",
            });
        }
    }

    // Senior cadence reminder: skipped entirely when there is no vet
    // history, to avoid nagging users who have not started tracking.
    if let (Some(age), Some(visit)) = (age, input.vet_visits.first()) {
        if breed.is_senior(age) && days_between(visit.visit_date, today) > 210 {
            flags.push(ScoreFlag {
                id: "senior_care",
                severity: FlagSeverity::Reminder,
                message: "In the senior stage, a checkup every 6 months is recommended".to_string(),
                action: "See vet history",
                href: "/health/history",
            });
        }
    }

    if input.foods.is_empty() {
        flags.push(ScoreFlag {
            id: "food_missing",
            severity: FlagSeverity::Tip,
            message: "Recording the current food completes the nutrition analysis".to_string(),
            action: "Add food",
            href: "/food",
        });
    }

    flags.sort_by_key(|flag| flag.severity);
    flags.truncate(MAX_FLAGS);
    flags
}
