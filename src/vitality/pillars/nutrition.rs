use crate::vitality::domain::{PillarScore, ScoreInput};
use crate::vitality::support::{classify_food_type, daily_kcal_need, kcal_per_gram, pillar_pct, FoodType};
use chrono::NaiveDate;

const NAME: &str = "Nutrition";
const EMOJI: &str = "\u{1F356}";

/// Nutrition pillar: 10 points for how well the food is documented, 10 for
/// how close the daily ration lands to the MER estimate.
pub(crate) fn score_nutrition(input: &ScoreInput, _today: NaiveDate) -> PillarScore {
    let mut tips: Vec<String> = Vec::new();

    let Some(food) = input.foods.first() else {
        return PillarScore {
            name: NAME,
            emoji: EMOJI,
            score: 10,
            max: 20,
            pct: 50,
            status: "Waiting for a first record".to_string(),
            tips: vec![
                "Log the current food to get a personalized nutrition analysis".to_string(),
            ],
            is_estimated: true,
        };
    };

    let mut quality_score: i32 = 5;
    if food.brand.is_some() {
        quality_score += 2;
    }
    if food.food_type.is_some() {
        quality_score += match classify_food_type(food.food_type.as_deref()) {
            Some(FoodType::Veterinary) | Some(FoodType::Premium) => 3,
            Some(FoodType::Kibble) => 2,
            _ => 1,
        };
    }
    let quality_score = quality_score.min(10);

    let daily_grams = food.daily_grams.filter(|grams| *grams > 0.0);
    let portion_score: i32 = match (daily_grams, input.latest_weight_kg()) {
        (Some(grams), Some(weight_kg)) => {
            let kcal_need = daily_kcal_need(weight_kg);
            let density = kcal_per_gram(food.food_type.as_deref());
            let kcal_provided = grams * density;
            let deviation_pct = (1.0 - kcal_provided / kcal_need).abs() * 100.0;

            if deviation_pct <= 10.0 {
                10
            } else if deviation_pct <= 20.0 {
                8
            } else if deviation_pct <= 35.0 {
                let ideal_grams = (kcal_need / density).round();
                tips.push(format!(
                    "The estimated ration would be ~{ideal_grams} g/day for this weight; it can be tuned with the vet"
                ));
                5
            } else {
                let ideal_grams = (kcal_need / density).round();
                tips.push(format!(
                    "The current ration differs from the estimate (~{ideal_grams} g/day); worth reviewing"
                ));
                3
            }
        }
        (Some(_), None) => {
            tips.push("Log the current weight to check whether the ration fits".to_string());
            6
        }
        (None, _) => {
            tips.push("Add the daily grams to validate the portion".to_string());
            2
        }
    };

    let score = (quality_score + portion_score).clamp(2, 20) as u8;
    let status = if score >= 17 {
        "Nutrition very well documented".to_string()
    } else if score >= 12 {
        format!("{} on record", food.brand.as_deref().unwrap_or("Food"))
    } else if score >= 7 {
        "Feeding data partially recorded".to_string()
    } else {
        "Feeding records just getting started".to_string()
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
        is_estimated: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vitality::domain::{FoodRecord, PetProfile};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
    }

    fn with_food(food: FoodRecord, weight_kg: Option<f64>) -> ScoreInput {
        ScoreInput {
            pet: PetProfile {
                weight_kg,
                ..PetProfile::default()
            },
            foods: vec![food],
            ..ScoreInput::default()
        }
    }

    #[test]
    fn no_food_record_is_a_neutral_estimate() {
        let pillar = score_nutrition(&ScoreInput::default(), today());
        assert_eq!(pillar.score, 10);
        assert!(pillar.is_estimated);
    }

    #[test]
    fn well_portioned_premium_food_maxes_out() {
        // 10 kg dog needs ~742 kcal; 195 g at 3.8 kcal/g = 741 kcal.
        let food = FoodRecord {
            brand: Some("Royal Canin".to_string()),
            daily_grams: Some(195.0),
            food_type: Some("premium".to_string()),
            ..FoodRecord::default()
        };
        let pillar = score_nutrition(&with_food(food, Some(10.0)), today());
        assert_eq!(pillar.score, 20);
        assert_eq!(pillar.status, "Nutrition very well documented");
        assert!(!pillar.is_estimated);
    }

    #[test]
    fn large_portion_deviation_includes_recommended_grams() {
        // 10 kg dog, 400 g of kibble = 1320 kcal vs ~742 needed: 78% over.
        let food = FoodRecord {
            brand: Some("Dog Chow".to_string()),
            daily_grams: Some(400.0),
            food_type: Some("croquetas".to_string()),
            ..FoodRecord::default()
        };
        let pillar = score_nutrition(&with_food(food, Some(10.0)), today());
        // Quality 5+2+2 = 9, portion 3.
        assert_eq!(pillar.score, 12);
        assert!(pillar.tips.iter().any(|tip| tip.contains("g/day")));
    }

    #[test]
    fn grams_without_weight_scores_six_and_prompts_for_weight() {
        let food = FoodRecord {
            daily_grams: Some(200.0),
            ..FoodRecord::default()
        };
        let pillar = score_nutrition(&with_food(food, None), today());
        // Quality 5 + portion 6.
        assert_eq!(pillar.score, 11);
        assert!(pillar.tips.iter().any(|tip| tip.contains("weight")));
        assert!(!pillar.is_estimated);
    }

    #[test]
    fn missing_grams_floors_the_portion_subscore() {
        let food = FoodRecord {
            brand: Some("Acme".to_string()),
            food_type: Some("casero".to_string()),
            ..FoodRecord::default()
        };
        let pillar = score_nutrition(&with_food(food, Some(12.0)), today());
        // Quality 5+2+1 = 8, portion 2.
        assert_eq!(pillar.score, 10);
        assert!(pillar.tips.iter().any(|tip| tip.contains("daily grams")));
    }

    #[test]
    fn unmatched_food_type_uses_default_density() {
        // 20 kg dog needs ~1248 kcal; 380 g at default 3.3 = 1254 kcal.
        let food = FoodRecord {
            brand: Some("Mystery Mix".to_string()),
            daily_grams: Some(380.0),
            food_type: Some("artisanal blend".to_string()),
            ..FoodRecord::default()
        };
        let pillar = score_nutrition(&with_food(food, Some(20.0)), today());
        // Quality 5+2+1 = 8, portion 10.
        assert_eq!(pillar.score, 18);
    }
}
