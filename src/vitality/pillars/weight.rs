use crate::vitality::breeds::breed_profile;
use crate::vitality::domain::{PillarScore, ScoreInput};
use crate::vitality::support::{clamp_pillar, pillar_pct};
use chrono::NaiveDate;

const NAME: &str = "Weight";
const EMOJI: &str = "\u{2696}\u{FE0F}";

/// Body-weight pillar: deviation from the breed's ideal band, adjusted by
/// the direction the last two records are moving.
pub(crate) fn score_weight(input: &ScoreInput, _today: NaiveDate) -> PillarScore {
    let breed = breed_profile(input.pet.breed.as_deref());
    let mut tips: Vec<String> = Vec::new();

    let Some(latest) = input.latest_weight_kg() else {
        return PillarScore {
            name: NAME,
            emoji: EMOJI,
            score: 10,
            max: 20,
            pct: 50,
            status: "Waiting for a first record".to_string(),
            tips: vec!["Logging weight regularly helps catch changes early".to_string()],
            is_estimated: true,
        };
    };

    let ideal = breed.ideal_weight_midpoint_kg();
    let deviation_pct = if ideal > 0.0 {
        ((latest - ideal) / ideal).abs() * 100.0
    } else {
        0.0
    };

    let mut points: i32 = if deviation_pct <= 5.0 {
        20
    } else if deviation_pct <= 10.0 {
        (20 - ((deviation_pct - 5.0) * 1.2).floor() as i32).max(14)
    } else if deviation_pct <= 20.0 {
        (14 - ((deviation_pct - 10.0) * 0.8).floor() as i32).max(6)
    } else {
        (6 - ((deviation_pct - 20.0) * 0.3).floor() as i32).max(2)
    };

    let over = latest > breed.ideal_weight_kg_max;
    let under = latest < breed.ideal_weight_kg_min;

    // Trend adjustment needs at least two records. A drop while over the
    // ideal band earns a point back and, deliberately, no tip.
    if input.weight_records.len() >= 2 {
        let previous = input.weight_records[1].weight_kg;
        let diff = latest - previous;
        if over && diff > 0.0 {
            points = (points - 2).max(2);
            tips.push("Weight is creeping up a little; reviewing portions may help".to_string());
        } else if over && diff < 0.0 {
            points = (points + 1).min(20);
        } else if under && diff < 0.0 {
            points = (points - 2).max(2);
            tips.push(
                "There is a slight weight loss; worth mentioning to the vet at the next visit"
                    .to_string(),
            );
        }
    }

    let status = if deviation_pct <= 5.0 {
        format!("Ideal weight \u{b7} {latest} kg")
    } else if over {
        tips.push(format!(
            "The recommended range for {} is {}-{} kg",
            breed.display_name, breed.ideal_weight_kg_min, breed.ideal_weight_kg_max
        ));
        format!("A bit above the ideal range \u{b7} {latest} kg")
    } else if under {
        tips.push(format!(
            "The recommended range for {} is {}-{} kg",
            breed.display_name, breed.ideal_weight_kg_min, breed.ideal_weight_kg_max
        ));
        format!("A bit below the ideal range \u{b7} {latest} kg")
    } else {
        format!("Good weight \u{b7} {latest} kg")
    };

    let score = clamp_pillar(points);
    tips.truncate(2);

    PillarScore {
        name: NAME,
        emoji: EMOJI,
        score,
        max: 20,
        pct: pillar_pct(score),
        status,
        tips,
        is_estimated: false,
    }
}
