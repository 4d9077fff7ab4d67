use crate::vitality::domain::{PillarScore, ScoreInput};
use crate::vitality::support::{days_between, pillar_pct, NO_RECORD_DAYS};
use chrono::NaiveDate;

const NAME: &str = "Activity";
const EMOJI: &str = "\u{1F3C3}";

/// Activity pillar: 12 points from adventures logged in the last 30 days,
/// 8 from grooming recency. Photo-diary entries stand in for exercise data.
pub(crate) fn score_activity(input: &ScoreInput, today: NaiveDate) -> PillarScore {
    let mut tips: Vec<String> = Vec::new();

    if input.adventures.is_empty() && input.groomings.is_empty() {
        return PillarScore {
            name: NAME,
            emoji: EMOJI,
            score: 10,
            max: 20,
            pct: 50,
            status: "Waiting for a first record".to_string(),
            tips: vec!["Logging walks and adventures helps visualize the activity level".to_string()],
            is_estimated: true,
        };
    }

    let recent_adventures = input
        .adventures
        .iter()
        .filter(|adventure| days_between(adventure.date, today) <= 30)
        .count();
    let adventure_score: i32 = match recent_adventures {
        count if count >= 4 => 12,
        count if count >= 2 => 8,
        1 => 5,
        _ => {
            if input.adventures.is_empty() {
                tips.push("Log walks and outings to see monthly activity".to_string());
            } else {
                tips.push(
                    "It has been a while since the last outing; any recent adventures to note?"
                        .to_string(),
                );
            }
            2
        }
    };

    let grooming_days = input
        .groomings
        .first()
        .map(|record| days_between(record.date, today))
        .unwrap_or(NO_RECORD_DAYS);
    let grooming_score: i32 = match grooming_days {
        days if days <= 30 => 8,
        days if days <= 60 => 5,
        days if days <= 90 => 2,
        _ => {
            if !input.groomings.is_empty() {
                tips.push("It has been a while since the last recorded grooming".to_string());
            }
            1
        }
    };

    let score = (adventure_score + grooming_score).clamp(2, 20) as u8;
    let status = if score >= 17 {
        "Very active and well groomed"
    } else if score >= 12 {
        "Good overall activity"
    } else if score >= 7 {
        "Moderate activity"
    } else {
        "Few activity records yet"
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
    use crate::vitality::domain::{AdventureRecord, GroomingRecord};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
    }

    fn adventures(days_ago: &[i64]) -> Vec<AdventureRecord> {
        days_ago
            .iter()
            .map(|days| AdventureRecord {
                date: today() - Duration::days(*days),
            })
            .collect()
    }

    #[test]
    fn empty_history_is_a_neutral_estimate() {
        let pillar = score_activity(&ScoreInput::default(), today());
        assert_eq!(pillar.score, 10);
        assert!(pillar.is_estimated);
    }

    #[test]
    fn frequent_adventures_and_fresh_grooming_max_out() {
        let input = ScoreInput {
            adventures: adventures(&[2, 7, 14, 21]),
            groomings: vec![GroomingRecord {
                date: today() - Duration::days(10),
            }],
            ..ScoreInput::default()
        };
        let pillar = score_activity(&input, today());
        assert_eq!(pillar.score, 20);
        assert_eq!(pillar.status, "Very active and well groomed");
    }

    #[test]
    fn adventure_bands_step_down_with_frequency() {
        for (recent, expected_adventure) in [(4usize, 12), (2, 8), (1, 5)] {
            let days: Vec<i64> = (0..recent as i64).map(|i| i * 5 + 1).collect();
            let input = ScoreInput {
                adventures: adventures(&days),
                groomings: vec![GroomingRecord {
                    date: today() - Duration::days(10),
                }],
                ..ScoreInput::default()
            };
            assert_eq!(
                score_activity(&input, today()).score,
                (expected_adventure + 8) as u8
            );
        }
    }

    #[test]
    fn old_adventures_prompt_for_recent_ones() {
        let input = ScoreInput {
            adventures: adventures(&[90, 120]),
            ..ScoreInput::default()
        };
        let pillar = score_activity(&input, today());
        // Adventures 2 + grooming 1 (none).
        assert_eq!(pillar.score, 3);
        assert!(pillar
            .tips
            .iter()
            .any(|tip| tip.contains("recent adventures")));
        // No grooming tip when there is no grooming history at all.
        assert_eq!(pillar.tips.len(), 1);
        assert!(!pillar.is_estimated);
    }

    #[test]
    fn stale_grooming_with_history_earns_a_tip() {
        let input = ScoreInput {
            adventures: adventures(&[5, 9, 12, 20]),
            groomings: vec![GroomingRecord {
                date: today() - Duration::days(150),
            }],
            ..ScoreInput::default()
        };
        let pillar = score_activity(&input, today());
        assert_eq!(pillar.score, 13);
        assert!(pillar.tips.iter().any(|tip| tip.contains("grooming")));
    }
}
