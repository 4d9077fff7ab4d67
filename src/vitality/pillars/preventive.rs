use crate::vitality::domain::{PillarScore, ScoreInput};
use crate::vitality::support::{classify_core_vaccine, days_between, pillar_pct, CoreVaccine};
use chrono::NaiveDate;

const NAME: &str = "Preventive care";
const EMOJI: &str = "\u{1FA7A}";

/// A vaccine given within this window still counts as current coverage.
const VACCINE_RECENT_DAYS: i64 = 548;

/// Preventive-care pillar: 10 points for vaccine coverage and recency,
/// 10 for vet-visit recency. Missing data is neutral, never punished hard.
pub(crate) fn score_preventive(input: &ScoreInput, today: NaiveDate) -> PillarScore {
    let mut tips: Vec<String> = Vec::new();

    if input.vaccines.is_empty() && input.vet_visits.is_empty() {
        return PillarScore {
            name: NAME,
            emoji: EMOJI,
            score: 10,
            max: 20,
            pct: 50,
            status: "Waiting for a first record".to_string(),
            tips: vec!["Add vaccines and vet visits to complete this indicator".to_string()],
            is_estimated: true,
        };
    }

    let vaccine_score: i32 = if input.vaccines.is_empty() {
        tips.push("Log vaccines to keep track of the immunization schedule".to_string());
        3
    } else {
        let covered = CoreVaccine::ALL
            .iter()
            .filter(|category| {
                input
                    .vaccines
                    .iter()
                    .any(|vaccine| classify_core_vaccine(&vaccine.name) == Some(**category))
            })
            .count() as i32;

        // 8 points spread across the four core disease categories, floored
        // at the no-data neutral value.
        let mut score = (covered * 2).max(3);

        let any_recent = input
            .vaccines
            .iter()
            .any(|vaccine| days_between(vaccine.date_given, today) < VACCINE_RECENT_DAYS);
        if any_recent {
            score = (score + 2).min(10);
        } else {
            tips.push(
                "It may be a good moment to review the vaccine schedule with the vet".to_string(),
            );
        }
        score
    };

    let vet_score: i32 = if input.vet_visits.is_empty() {
        tips.push("Logging vet visits helps keep a complete history".to_string());
        3
    } else {
        match days_between(input.vet_visits[0].visit_date, today) {
            days if days <= 365 => 10,
            days if days <= 548 => 7,
            days if days <= 730 => {
                tips.push(
                    "It has been a while since the last recorded visit; an annual checkup is ideal"
                        .to_string(),
                );
                4
            }
            _ => {
                tips.push("It would be a good idea to book a routine checkup soon".to_string());
                1
            }
        }
    };

    let score = (vaccine_score + vet_score).clamp(2, 20) as u8;
    let status = if score >= 18 {
        "Preventive care up to date"
    } else if score >= 14 {
        "Good preventive follow-up"
    } else if score >= 8 {
        "Some records pending"
    } else {
        "Starting to build the history"
    };

    tips.truncate(2);

    PillarScore {
        name: NAME,
        emoji: EMOJI,
        score,
        max: 20,
        pct: pillar_pct(score),
        status: status.to_string(),
        tips,
        is_estimated: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vitality::domain::{VaccineRecord, VetVisitRecord};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
    }

    fn vaccine(name: &str, days_ago: i64) -> VaccineRecord {
        VaccineRecord {
            name: name.to_string(),
            date_given: today() - Duration::days(days_ago),
        }
    }

    fn visit(days_ago: i64) -> VetVisitRecord {
        VetVisitRecord {
            visit_date: today() - Duration::days(days_ago),
        }
    }

    #[test]
    fn empty_history_is_a_neutral_estimate() {
        let pillar = score_preventive(&ScoreInput::default(), today());
        assert_eq!(pillar.score, 10);
        assert!(pillar.is_estimated);
    }

    #[test]
    fn full_core_coverage_with_recent_visit_maxes_out() {
        let input = ScoreInput {
            vaccines: vec![
                vaccine("Rabia", 100),
                vaccine("Parvovirus", 100),
                vaccine("Moquillo", 100),
                vaccine("Adenovirus", 100),
            ],
            vet_visits: vec![visit(90)],
            ..ScoreInput::default()
        };
        let pillar = score_preventive(&input, today());
        // Coverage 8 + recency 2 = 10 vaccine, visit within a year = 10.
        assert_eq!(pillar.score, 20);
        assert_eq!(pillar.status, "Preventive care up to date");
        assert!(!pillar.is_estimated);
    }

    #[test]
    fn english_names_count_toward_core_coverage() {
        let spanish = ScoreInput {
            vaccines: vec![vaccine("Rabia", 100), vaccine("Moquillo", 100)],
            vet_visits: vec![visit(90)],
            ..ScoreInput::default()
        };
        let english = ScoreInput {
            vaccines: vec![vaccine("Rabies", 100), vaccine("Distemper", 100)],
            vet_visits: vec![visit(90)],
            ..ScoreInput::default()
        };
        assert_eq!(
            score_preventive(&spanish, today()).score,
            score_preventive(&english, today()).score
        );
    }

    #[test]
    fn stale_vaccines_lose_the_recency_bonus_and_gain_a_tip() {
        let input = ScoreInput {
            vaccines: vec![vaccine("Rabia", 600)],
            vet_visits: vec![visit(90)],
            ..ScoreInput::default()
        };
        let pillar = score_preventive(&input, today());
        // One covered category: max(3, 2) = 3, no bonus; vet 10.
        assert_eq!(pillar.score, 13);
        assert!(pillar.tips.iter().any(|tip| tip.contains("vaccine schedule")));
    }

    #[test]
    fn vet_recency_bands_step_down() {
        for (days_ago, expected) in [(300, 20), (500, 17), (700, 14), (800, 11)] {
            let input = ScoreInput {
                vaccines: vec![
                    vaccine("Rabia", 100),
                    vaccine("Parvo", 100),
                    vaccine("Moquillo", 100),
                    vaccine("Hepatitis", 100),
                ],
                vet_visits: vec![visit(days_ago)],
                ..ScoreInput::default()
            };
            assert_eq!(score_preventive(&input, today()).score, expected as u8);
        }
    }

    #[test]
    fn visits_without_vaccines_stay_moderate() {
        let input = ScoreInput {
            vet_visits: vec![visit(100)],
            ..ScoreInput::default()
        };
        let pillar = score_preventive(&input, today());
        // Vaccine neutral 3 + vet 10.
        assert_eq!(pillar.score, 13);
        assert!(!pillar.is_estimated);
    }

    #[test]
    fn more_core_coverage_never_scores_lower() {
        let names = ["Rabia", "Parvovirus", "Moquillo", "Adenovirus"];
        let mut previous = 0u8;
        for count in 0..=4 {
            let input = ScoreInput {
                vaccines: names
                    .iter()
                    .take(count)
                    .map(|name| vaccine(name, 100))
                    .chain(std::iter::once(vaccine("Bordetella", 100)))
                    .collect(),
                vet_visits: vec![visit(90)],
                ..ScoreInput::default()
            };
            let score = score_preventive(&input, today()).score;
            assert!(score >= previous, "coverage {count} regressed");
            previous = score;
        }
    }
}
