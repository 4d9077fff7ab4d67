use crate::vitality::breeds::{breed_profile, is_known_breed, HealthRisk, RiskLevel, SizeCategory};
use crate::vitality::domain::{PillarScore, ScoreInput};
use crate::vitality::support::{age_in_years, clamp_pillar, days_between, pillar_pct, NO_RECORD_DAYS};
use chrono::NaiveDate;

const NAME: &str = "Breed & age";
const EMOJI: &str = "\u{1F9EC}";

/// Breed-and-age pillar: starts from a full 20 and applies informative
/// deductions for age-linked breed predispositions. Deductions are gentle
/// by design; this pillar nudges, it does not diagnose.
pub(crate) fn score_breed_age(input: &ScoreInput, today: NaiveDate) -> PillarScore {
    let breed = breed_profile(input.pet.breed.as_deref());
    let age = age_in_years(input.pet.birth_date, today);
    let has_breed = is_known_breed(input.pet.breed.as_deref());
    let mut tips: Vec<String> = Vec::new();
    let mut points: i32 = 20;
    let mut is_estimated = false;

    if !has_breed && age.is_none() {
        return PillarScore {
            name: NAME,
            emoji: EMOJI,
            score: 12,
            max: 20,
            pct: 60,
            status: "Incomplete profile".to_string(),
            tips: vec![
                "Adding breed and birth date lets the analysis be personalized".to_string(),
            ],
            is_estimated: true,
        };
    }

    if !has_breed {
        is_estimated = true;
        points = points.min(15);
        tips.push("Add the breed to the profile for a more precise analysis".to_string());
    }

    if age.is_none() {
        is_estimated = true;
        points = points.min(15);
        tips.push("The birth date lets age-related risks be detected".to_string());
    }

    if let Some(age) = age {
        // Dental: small jaws and brachycephalic heads accumulate tartar
        // fast once the puppy teeth are gone.
        if age >= 2 {
            let dental_prone = matches!(breed.dental_risk, RiskLevel::High | RiskLevel::VeryHigh)
                || matches!(breed.size, SizeCategory::Toy | SizeCategory::Small)
                || breed.has_risk(HealthRisk::BrachycephalicSyndrome);
            let grooming_days = input
                .groomings
                .first()
                .map(|record| days_between(record.date, today))
                .unwrap_or(NO_RECORD_DAYS);
            if dental_prone && grooming_days > 60 {
                points -= 3;
                tips.push(
                    "Dental health matters in this breed; periodic cleaning makes a difference"
                        .to_string(),
                );
            }
        }

        if age >= 5 && breed.cardiac_risk == RiskLevel::VeryHigh {
            points -= 3;
            tips.push(format!(
                "For {}, a routine cardiac review is recommended from age 5",
                breed.display_name
            ));
        }

        if age >= 6
            && breed.obesity_risk == RiskLevel::VeryHigh
            && input.pet.is_neutered == Some(true)
        {
            if let Some(latest) = input.latest_weight_kg() {
                if latest > breed.ideal_weight_kg_max {
                    points -= 2;
                    tips.push(
                        "Breeds that gain weight easily need controlled portions at this stage"
                            .to_string(),
                    );
                }
            }
        }

        if breed.is_senior(age) {
            points -= 2;
            if tips.len() < 2 {
                tips.push(
                    "In the senior stage, more frequent checkups help catch changes early"
                        .to_string(),
                );
            }
        }
    }

    let score = clamp_pillar(points);
    let breed_name = if has_breed {
        breed.display_name
    } else {
        "Mixed breed"
    };
    let status = if score >= 18 {
        format!("{breed_name} \u{b7} No active alerts")
    } else if score >= 14 {
        format!("{breed_name} \u{b7} Some recommendations")
    } else if score >= 8 {
        format!("{breed_name} \u{b7} Attention suggested")
    } else {
        format!("{breed_name} \u{b7} Several areas to watch")
    };

    tips.truncate(2);

    PillarScore {
        name: NAME,
        emoji: EMOJI,
        score,
        max: 20,
        pct: pillar_pct(score),
        status,
        tips,
        is_estimated,
    }
}
