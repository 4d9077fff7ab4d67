use chrono::{Datelike, NaiveDate};

/// Sentinel "days since" when a collection has no record at all. Large
/// enough to fall past every recency band.
pub(crate) const NO_RECORD_DAYS: i64 = 999;

pub(crate) fn days_between(then: NaiveDate, today: NaiveDate) -> i64 {
    (today - then).num_days()
}

/// Whole calendar years between the birth date and today, floored at zero.
pub(crate) fn age_in_years(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    let birth = birth_date?;
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Some(years.max(0))
}

/// Case-folds and strips the diacritics that show up in user-entered
/// Spanish record names, so "Moquillo" and "moquíllo" match the same keyword.
pub(crate) fn fold_text(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// The four disease categories considered core by AVMA/WSAVA guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoreVaccine {
    Rabies,
    Parvovirus,
    Distemper,
    Adenovirus,
}

impl CoreVaccine {
    pub(crate) const ALL: [Self; 4] = [
        Self::Rabies,
        Self::Parvovirus,
        Self::Distemper,
        Self::Adenovirus,
    ];

    /// Ordered keyword list, first match wins. Spanish and English forms
    /// both map to the same category.
    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Rabies => &["rabia", "rabies"],
            Self::Parvovirus => &["parvo"],
            Self::Distemper => &["moquillo", "distemper"],
            Self::Adenovirus => &["adenovirus", "hepatitis"],
        }
    }
}

/// Classifies a free-text vaccine name into a core category, if any.
pub(crate) fn classify_core_vaccine(name: &str) -> Option<CoreVaccine> {
    let folded = fold_text(name);
    for category in CoreVaccine::ALL {
        if category.keywords().iter().any(|kw| folded.contains(kw)) {
            return Some(category);
        }
    }
    None
}

/// Calorie-density tier for a food entry, matched from its free-text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoodType {
    Veterinary,
    Premium,
    Kibble,
    Raw,
    Wet,
    Homemade,
}

/// Ordered (pattern, type) pairs, first match wins. Specific tiers come
/// before generic ones so "premium croquetas" resolves as premium.
const FOOD_TYPE_PATTERNS: &[(&str, FoodType)] = &[
    ("veterinario", FoodType::Veterinary),
    ("veterinary", FoodType::Veterinary),
    ("premium", FoodType::Premium),
    ("croquetas", FoodType::Kibble),
    ("kibble", FoodType::Kibble),
    ("raw", FoodType::Raw),
    ("barf", FoodType::Raw),
    ("humedo", FoodType::Wet),
    ("wet", FoodType::Wet),
    ("casero", FoodType::Homemade),
    ("homemade", FoodType::Homemade),
];

/// kcal per gram when the type is unrecognized: average dry kibble.
pub(crate) const DEFAULT_KCAL_PER_GRAM: f64 = 3.3;

impl FoodType {
    pub(crate) const fn kcal_per_gram(self) -> f64 {
        match self {
            Self::Veterinary | Self::Premium => 3.8,
            Self::Kibble => DEFAULT_KCAL_PER_GRAM,
            Self::Raw => 1.8,
            Self::Wet => 1.0,
            Self::Homemade => 1.5,
        }
    }
}

pub(crate) fn classify_food_type(food_type: Option<&str>) -> Option<FoodType> {
    let folded = fold_text(food_type?);
    FOOD_TYPE_PATTERNS
        .iter()
        .find(|(pattern, _)| folded.contains(pattern))
        .map(|(_, tier)| *tier)
}

pub(crate) fn kcal_per_gram(food_type: Option<&str>) -> f64 {
    classify_food_type(food_type)
        .map(FoodType::kcal_per_gram)
        .unwrap_or(DEFAULT_KCAL_PER_GRAM)
}

/// MER (Metabolic Energy Requirement) for active adult dogs, per Purina:
/// kcal/day = 132 x weight_kg^0.75.
pub(crate) fn daily_kcal_need(weight_kg: f64) -> f64 {
    132.0 * weight_kg.powf(0.75)
}

/// Pillar percentage display: clamp(score x 5, 10, 100).
pub(crate) fn pillar_pct(score: u8) -> u8 {
    (u16::from(score) * 5).clamp(10, 100) as u8
}

/// All pillar scores land in [2, 20] except explicit neutral defaults.
pub(crate) fn clamp_pillar(points: i32) -> u8 {
    points.clamp(2, 20) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_text("  Moquíllo Canino "), "moquillo canino");
        assert_eq!(fold_text("RABIA"), "rabia");
        assert_eq!(fold_text("Ñandú"), "nandu");
    }

    #[test]
    fn classifies_core_vaccines_in_both_languages() {
        assert_eq!(classify_core_vaccine("Rabia anual"), Some(CoreVaccine::Rabies));
        assert_eq!(classify_core_vaccine("Rabies booster"), Some(CoreVaccine::Rabies));
        assert_eq!(classify_core_vaccine("Parvo"), Some(CoreVaccine::Parvovirus));
        assert_eq!(classify_core_vaccine("Moquillo"), Some(CoreVaccine::Distemper));
        assert_eq!(
            classify_core_vaccine("Hepatitis infecciosa"),
            Some(CoreVaccine::Adenovirus)
        );
        assert_eq!(classify_core_vaccine("Bordetella"), None);
    }

    #[test]
    fn food_type_first_match_wins() {
        assert_eq!(
            classify_food_type(Some("Croquetas premium")),
            Some(FoodType::Premium)
        );
        assert_eq!(classify_food_type(Some("croquetas")), Some(FoodType::Kibble));
        assert_eq!(classify_food_type(Some("alimento húmedo")), Some(FoodType::Wet));
        assert_eq!(classify_food_type(Some("snacks")), None);
        assert_eq!(classify_food_type(None), None);
    }

    #[test]
    fn kcal_lookup_defaults_to_kibble_density() {
        assert_eq!(kcal_per_gram(Some("raw")), 1.8);
        assert_eq!(kcal_per_gram(Some("unknown stuff")), DEFAULT_KCAL_PER_GRAM);
        assert_eq!(kcal_per_gram(None), DEFAULT_KCAL_PER_GRAM);
    }

    #[test]
    fn mer_matches_reference_points() {
        // 10 kg adult dog: 132 * 10^0.75 ~ 742 kcal/day.
        assert!((daily_kcal_need(10.0) - 742.3).abs() < 0.5);
        assert!((daily_kcal_need(30.0) - 1692.0).abs() < 1.0);
    }

    #[test]
    fn age_in_years_uses_calendar_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date");
        let birth = NaiveDate::from_ymd_opt(2020, 6, 16).expect("valid date");
        assert_eq!(age_in_years(Some(birth), today), Some(5));
        let birth = NaiveDate::from_ymd_opt(2020, 6, 15).expect("valid date");
        assert_eq!(age_in_years(Some(birth), today), Some(6));
        assert_eq!(age_in_years(None, today), None);
        // Birth date in the future floors at zero rather than going negative.
        let future = NaiveDate::from_ymd_opt(2027, 1, 1).expect("valid date");
        assert_eq!(age_in_years(Some(future), today), Some(0));
    }

    #[test]
    fn pillar_pct_is_clamped() {
        assert_eq!(pillar_pct(20), 100);
        assert_eq!(pillar_pct(10), 50);
        assert_eq!(pillar_pct(2), 10);
        assert_eq!(pillar_pct(1), 10);
    }
}
