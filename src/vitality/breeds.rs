//! Static breed reference data.
//!
//! Weight ranges cover the combined male/female adult range per AKC/FCI
//! breed standards; lifespans are midpoints from published breed health
//! surveys (VetCompass, OFA, Gough/Thomas/O'Neill 3rd ed.). Risk lists are
//! the top veterinary-confirmed predispositions per breed.

use super::support::fold_text;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    Toy,
    Small,
    Medium,
    Large,
    Giant,
}

impl SizeCategory {
    /// Age at which a dog of this size is considered senior. Owned here so
    /// pillar scorers never hard-code a threshold.
    pub const fn senior_age_years(self) -> i32 {
        match self {
            Self::Giant => 6,
            Self::Large => 7,
            Self::Medium => 8,
            Self::Small => 9,
            Self::Toy => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRisk {
    Obesity,
    HipDysplasia,
    ElbowDysplasia,
    ExerciseInducedCollapse,
    Cancer,
    CardiacDisease,
    DilatedCardiomyopathy,
    MitralValveDisease,
    Arrhythmia,
    DegenerativeMyelopathy,
    BrachycephalicSyndrome,
    DentalDisease,
    Epilepsy,
    EyeDisease,
    SkinDisease,
    Bloat,
    PatellarLuxation,
    Hypothyroidism,
    TrachealCollapse,
    IntervertebralDiscDisease,
    ProgressiveRetinalAtrophy,
    AddisonsDisease,
    Osteosarcoma,
    VonWillebrandDisease,
    Deafness,
    Syringomyelia,
    Pancreatitis,
    RenalDysplasia,
    PortosystemicShunt,
    EarInfections,
    UrinaryStones,
}

/// Reference profile for one breed. Lookup is total: unknown identifiers
/// resolve to the mixed/unknown fallback, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedProfile {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub ideal_weight_kg_min: f64,
    pub ideal_weight_kg_max: f64,
    pub size: SizeCategory,
    pub lifespan_years: u8,
    pub risks: &'static [HealthRisk],
    pub dental_risk: RiskLevel,
    pub cardiac_risk: RiskLevel,
    pub obesity_risk: RiskLevel,
}

impl BreedProfile {
    pub fn ideal_weight_midpoint_kg(&self) -> f64 {
        (self.ideal_weight_kg_min + self.ideal_weight_kg_max) / 2.0
    }

    pub fn has_risk(&self, risk: HealthRisk) -> bool {
        self.risks.contains(&risk)
    }

    pub fn is_senior(&self, age_years: i32) -> bool {
        age_years >= self.size.senior_age_years()
    }
}

const BREEDS: &[BreedProfile] = &[
    BreedProfile {
        slug: "labrador_retriever",
        display_name: "Labrador Retriever",
        ideal_weight_kg_min: 25.0,
        ideal_weight_kg_max: 36.0,
        size: SizeCategory::Large,
        lifespan_years: 12,
        risks: &[
            HealthRisk::Obesity,
            HealthRisk::HipDysplasia,
            HealthRisk::ElbowDysplasia,
            HealthRisk::ExerciseInducedCollapse,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::VeryHigh,
    },
    BreedProfile {
        slug: "golden_retriever",
        display_name: "Golden Retriever",
        ideal_weight_kg_min: 25.0,
        ideal_weight_kg_max: 34.0,
        size: SizeCategory::Large,
        lifespan_years: 11,
        risks: &[
            HealthRisk::Cancer,
            HealthRisk::HipDysplasia,
            HealthRisk::ElbowDysplasia,
            HealthRisk::CardiacDisease,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Medium,
        obesity_risk: RiskLevel::High,
    },
    BreedProfile {
        slug: "german_shepherd",
        display_name: "German Shepherd",
        ideal_weight_kg_min: 22.0,
        ideal_weight_kg_max: 40.0,
        size: SizeCategory::Large,
        lifespan_years: 11,
        risks: &[
            HealthRisk::DegenerativeMyelopathy,
            HealthRisk::HipDysplasia,
            HealthRisk::ElbowDysplasia,
            HealthRisk::Bloat,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "french_bulldog",
        display_name: "French Bulldog",
        ideal_weight_kg_min: 8.0,
        ideal_weight_kg_max: 13.0,
        size: SizeCategory::Small,
        lifespan_years: 9,
        risks: &[
            HealthRisk::BrachycephalicSyndrome,
            HealthRisk::SkinDisease,
            HealthRisk::EyeDisease,
            HealthRisk::IntervertebralDiscDisease,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Medium,
        obesity_risk: RiskLevel::High,
    },
    BreedProfile {
        slug: "bulldog",
        display_name: "Bulldog",
        ideal_weight_kg_min: 18.0,
        ideal_weight_kg_max: 25.0,
        size: SizeCategory::Medium,
        lifespan_years: 8,
        risks: &[
            HealthRisk::BrachycephalicSyndrome,
            HealthRisk::SkinDisease,
            HealthRisk::HipDysplasia,
            HealthRisk::PatellarLuxation,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Medium,
        obesity_risk: RiskLevel::High,
    },
    BreedProfile {
        slug: "pug",
        display_name: "Pug",
        ideal_weight_kg_min: 6.0,
        ideal_weight_kg_max: 8.0,
        size: SizeCategory::Toy,
        lifespan_years: 11,
        risks: &[
            HealthRisk::BrachycephalicSyndrome,
            HealthRisk::EyeDisease,
            HealthRisk::Obesity,
            HealthRisk::SkinDisease,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::VeryHigh,
    },
    BreedProfile {
        slug: "shih_tzu",
        display_name: "Shih Tzu",
        ideal_weight_kg_min: 4.0,
        ideal_weight_kg_max: 7.0,
        size: SizeCategory::Toy,
        lifespan_years: 13,
        risks: &[
            HealthRisk::BrachycephalicSyndrome,
            HealthRisk::EyeDisease,
            HealthRisk::DentalDisease,
            HealthRisk::RenalDysplasia,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "beagle",
        display_name: "Beagle",
        ideal_weight_kg_min: 8.0,
        ideal_weight_kg_max: 14.0,
        size: SizeCategory::Small,
        lifespan_years: 13,
        risks: &[
            HealthRisk::Obesity,
            HealthRisk::EarInfections,
            HealthRisk::Hypothyroidism,
            HealthRisk::Epilepsy,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::VeryHigh,
    },
    BreedProfile {
        slug: "dachshund",
        display_name: "Dachshund",
        ideal_weight_kg_min: 4.0,
        ideal_weight_kg_max: 14.0,
        size: SizeCategory::Small,
        lifespan_years: 14,
        risks: &[
            HealthRisk::IntervertebralDiscDisease,
            HealthRisk::Obesity,
            HealthRisk::PatellarLuxation,
            HealthRisk::DentalDisease,
        ],
        dental_risk: RiskLevel::High,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::VeryHigh,
    },
    BreedProfile {
        slug: "boxer",
        display_name: "Boxer",
        ideal_weight_kg_min: 25.0,
        ideal_weight_kg_max: 32.0,
        size: SizeCategory::Medium,
        lifespan_years: 10,
        risks: &[
            HealthRisk::Arrhythmia,
            HealthRisk::Cancer,
            HealthRisk::BrachycephalicSyndrome,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::VeryHigh,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "rottweiler",
        display_name: "Rottweiler",
        ideal_weight_kg_min: 35.0,
        ideal_weight_kg_max: 60.0,
        size: SizeCategory::Large,
        lifespan_years: 9,
        risks: &[
            HealthRisk::Osteosarcoma,
            HealthRisk::HipDysplasia,
            HealthRisk::ElbowDysplasia,
            HealthRisk::CardiacDisease,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Medium,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "doberman_pinscher",
        display_name: "Doberman Pinscher",
        ideal_weight_kg_min: 32.0,
        ideal_weight_kg_max: 45.0,
        size: SizeCategory::Large,
        lifespan_years: 10,
        risks: &[
            HealthRisk::DilatedCardiomyopathy,
            HealthRisk::VonWillebrandDisease,
            HealthRisk::DegenerativeMyelopathy,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::VeryHigh,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "great_dane",
        display_name: "Great Dane",
        ideal_weight_kg_min: 50.0,
        ideal_weight_kg_max: 90.0,
        size: SizeCategory::Giant,
        lifespan_years: 8,
        risks: &[
            HealthRisk::Bloat,
            HealthRisk::DilatedCardiomyopathy,
            HealthRisk::Osteosarcoma,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::VeryHigh,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "border_collie",
        display_name: "Border Collie",
        ideal_weight_kg_min: 12.0,
        ideal_weight_kg_max: 20.0,
        size: SizeCategory::Medium,
        lifespan_years: 13,
        risks: &[
            HealthRisk::EyeDisease,
            HealthRisk::Epilepsy,
            HealthRisk::HipDysplasia,
            HealthRisk::DegenerativeMyelopathy,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Low,
    },
    BreedProfile {
        slug: "cocker_spaniel",
        display_name: "Cocker Spaniel",
        ideal_weight_kg_min: 9.0,
        ideal_weight_kg_max: 14.0,
        size: SizeCategory::Small,
        lifespan_years: 13,
        risks: &[
            HealthRisk::EyeDisease,
            HealthRisk::EarInfections,
            HealthRisk::Hypothyroidism,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "cavalier_king_charles_spaniel",
        display_name: "Cavalier King Charles Spaniel",
        ideal_weight_kg_min: 5.0,
        ideal_weight_kg_max: 9.0,
        size: SizeCategory::Small,
        lifespan_years: 11,
        risks: &[
            HealthRisk::MitralValveDisease,
            HealthRisk::Syringomyelia,
            HealthRisk::EyeDisease,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::VeryHigh,
        obesity_risk: RiskLevel::High,
    },
    BreedProfile {
        slug: "siberian_husky",
        display_name: "Siberian Husky",
        ideal_weight_kg_min: 16.0,
        ideal_weight_kg_max: 27.0,
        size: SizeCategory::Medium,
        lifespan_years: 13,
        risks: &[
            HealthRisk::EyeDisease,
            HealthRisk::Epilepsy,
            HealthRisk::ProgressiveRetinalAtrophy,
            HealthRisk::HipDysplasia,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Low,
    },
    BreedProfile {
        slug: "pomeranian",
        display_name: "Pomeranian",
        ideal_weight_kg_min: 1.0,
        ideal_weight_kg_max: 3.0,
        size: SizeCategory::Toy,
        lifespan_years: 14,
        risks: &[
            HealthRisk::TrachealCollapse,
            HealthRisk::DentalDisease,
            HealthRisk::PatellarLuxation,
            HealthRisk::SkinDisease,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "chihuahua",
        display_name: "Chihuahua",
        ideal_weight_kg_min: 1.0,
        ideal_weight_kg_max: 3.0,
        size: SizeCategory::Toy,
        lifespan_years: 15,
        risks: &[
            HealthRisk::DentalDisease,
            HealthRisk::PatellarLuxation,
            HealthRisk::TrachealCollapse,
            HealthRisk::Epilepsy,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "maltese",
        display_name: "Maltese",
        ideal_weight_kg_min: 1.0,
        ideal_weight_kg_max: 3.0,
        size: SizeCategory::Toy,
        lifespan_years: 14,
        risks: &[
            HealthRisk::DentalDisease,
            HealthRisk::PatellarLuxation,
            HealthRisk::PortosystemicShunt,
            HealthRisk::TrachealCollapse,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Low,
    },
    BreedProfile {
        slug: "yorkshire_terrier",
        display_name: "Yorkshire Terrier",
        ideal_weight_kg_min: 2.0,
        ideal_weight_kg_max: 3.0,
        size: SizeCategory::Toy,
        lifespan_years: 14,
        risks: &[
            HealthRisk::TrachealCollapse,
            HealthRisk::DentalDisease,
            HealthRisk::PatellarLuxation,
            HealthRisk::PortosystemicShunt,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "jack_russell_terrier",
        display_name: "Jack Russell Terrier",
        ideal_weight_kg_min: 5.0,
        ideal_weight_kg_max: 8.0,
        size: SizeCategory::Small,
        lifespan_years: 14,
        risks: &[
            HealthRisk::PatellarLuxation,
            HealthRisk::EyeDisease,
            HealthRisk::Deafness,
            HealthRisk::Epilepsy,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Low,
    },
    BreedProfile {
        slug: "poodle_standard",
        display_name: "Standard Poodle",
        ideal_weight_kg_min: 20.0,
        ideal_weight_kg_max: 32.0,
        size: SizeCategory::Medium,
        lifespan_years: 13,
        risks: &[
            HealthRisk::AddisonsDisease,
            HealthRisk::Bloat,
            HealthRisk::HipDysplasia,
            HealthRisk::EyeDisease,
        ],
        dental_risk: RiskLevel::Medium,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Low,
    },
    BreedProfile {
        slug: "schnauzer_miniature",
        display_name: "Miniature Schnauzer",
        ideal_weight_kg_min: 5.0,
        ideal_weight_kg_max: 9.0,
        size: SizeCategory::Small,
        lifespan_years: 14,
        risks: &[
            HealthRisk::Pancreatitis,
            HealthRisk::UrinaryStones,
            HealthRisk::DentalDisease,
            HealthRisk::EyeDisease,
        ],
        dental_risk: RiskLevel::VeryHigh,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "staffordshire_bull_terrier",
        display_name: "Staffordshire Bull Terrier",
        ideal_weight_kg_min: 11.0,
        ideal_weight_kg_max: 17.0,
        size: SizeCategory::Medium,
        lifespan_years: 13,
        risks: &[
            HealthRisk::SkinDisease,
            HealthRisk::EyeDisease,
            HealthRisk::PatellarLuxation,
            HealthRisk::DentalDisease,
        ],
        dental_risk: RiskLevel::High,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
    BreedProfile {
        slug: "weimaraner",
        display_name: "Weimaraner",
        ideal_weight_kg_min: 25.0,
        ideal_weight_kg_max: 37.0,
        size: SizeCategory::Large,
        lifespan_years: 12,
        risks: &[
            HealthRisk::Bloat,
            HealthRisk::HipDysplasia,
            HealthRisk::Hypothyroidism,
            HealthRisk::VonWillebrandDisease,
        ],
        dental_risk: RiskLevel::Low,
        cardiac_risk: RiskLevel::Low,
        obesity_risk: RiskLevel::Medium,
    },
];

/// Fallback profile for mixed, rescue, and unrecognized breeds. Wide weight
/// band; crossbreeds carry a lower genetic disease burden overall.
const MIXED_UNKNOWN: BreedProfile = BreedProfile {
    slug: "mixed_unknown",
    display_name: "Mixed breed",
    ideal_weight_kg_min: 10.0,
    ideal_weight_kg_max: 30.0,
    size: SizeCategory::Medium,
    lifespan_years: 13,
    risks: &[
        HealthRisk::Obesity,
        HealthRisk::DentalDisease,
        HealthRisk::SkinDisease,
        HealthRisk::EarInfections,
    ],
    dental_risk: RiskLevel::Medium,
    cardiac_risk: RiskLevel::Low,
    obesity_risk: RiskLevel::Medium,
};

/// Shorthand identifiers the product's breed picker emits, mapped to slugs.
const ALIASES: &[(&str, &str)] = &[
    ("doberman", "doberman_pinscher"),
    ("husky", "siberian_husky"),
    ("poodle", "poodle_standard"),
    ("schnauzer", "schnauzer_miniature"),
    ("pitbull", "staffordshire_bull_terrier"),
    ("pit_bull", "staffordshire_bull_terrier"),
];

/// Canonicalizes a user-facing breed identifier to table-slug form:
/// "Cocker Spaniel" and "cócker  spaniel" both become "cocker_spaniel".
fn slugify(identifier: &str) -> String {
    let folded = fold_text(identifier);
    let mut slug = String::with_capacity(folded.len());
    let mut last_was_separator = true;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Finds the reference entry for a breed identifier, if it maps to a real
/// (non-fallback) breed.
pub fn find_breed(identifier: &str) -> Option<&'static BreedProfile> {
    let slug = slugify(identifier);
    if slug.is_empty() {
        return None;
    }
    let slug = ALIASES
        .iter()
        .find(|(alias, _)| *alias == slug)
        .map(|(_, target)| *target)
        .unwrap_or(&slug);
    BREEDS.iter().find(|profile| profile.slug == slug)
}

/// Total lookup: unmapped, mixed, or missing identifiers all resolve to the
/// mixed/unknown profile.
pub fn breed_profile(identifier: Option<&str>) -> &'static BreedProfile {
    identifier.and_then(find_breed).unwrap_or(&MIXED_UNKNOWN)
}

/// Whether the identifier resolves to a specific breed. Mixed/rescue and
/// "Other" picker entries count as unknown for scoring purposes.
pub fn is_known_breed(identifier: Option<&str>) -> bool {
    identifier.and_then(find_breed).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_normalizes_display_names() {
        let labrador = breed_profile(Some("Labrador Retriever"));
        assert_eq!(labrador.slug, "labrador_retriever");
        assert_eq!(labrador.ideal_weight_kg_min, 25.0);
        assert_eq!(labrador.ideal_weight_kg_max, 36.0);

        let with_accent = breed_profile(Some("  Cócker Spaniel "));
        assert_eq!(with_accent.slug, "cocker_spaniel");
    }

    #[test]
    fn aliases_map_to_full_entries() {
        assert_eq!(breed_profile(Some("Doberman")).slug, "doberman_pinscher");
        assert_eq!(breed_profile(Some("Husky")).slug, "siberian_husky");
        assert_eq!(breed_profile(Some("Poodle")).slug, "poodle_standard");
        assert_eq!(breed_profile(Some("Pitbull")).slug, "staffordshire_bull_terrier");
    }

    #[test]
    fn unknown_breeds_fall_back_without_error() {
        let fallback = breed_profile(Some("Space Corgi"));
        assert_eq!(fallback.slug, "mixed_unknown");
        assert_eq!(breed_profile(None).slug, "mixed_unknown");
        assert_eq!(breed_profile(Some("Mixed / Rescue")).slug, "mixed_unknown");
        assert_eq!(breed_profile(Some("Other")).slug, "mixed_unknown");
    }

    #[test]
    fn known_breed_excludes_fallback_identifiers() {
        assert!(is_known_breed(Some("Beagle")));
        assert!(!is_known_breed(Some("Other")));
        assert!(!is_known_breed(Some("Mixed / Rescue")));
        assert!(!is_known_breed(None));
    }

    #[test]
    fn senior_threshold_tracks_size_category() {
        assert_eq!(SizeCategory::Giant.senior_age_years(), 6);
        assert_eq!(SizeCategory::Toy.senior_age_years(), 10);
        let dane = breed_profile(Some("Great Dane"));
        assert!(dane.is_senior(6));
        assert!(!dane.is_senior(5));
        let chihuahua = breed_profile(Some("Chihuahua"));
        assert!(!chihuahua.is_senior(9));
        assert!(chihuahua.is_senior(10));
    }

    #[test]
    fn every_entry_has_a_sane_weight_band() {
        for profile in BREEDS.iter().chain(std::iter::once(&MIXED_UNKNOWN)) {
            assert!(
                profile.ideal_weight_kg_min < profile.ideal_weight_kg_max,
                "{} has inverted weight band",
                profile.slug
            );
            assert!(profile.ideal_weight_midpoint_kg() > 0.0);
            assert_eq!(profile.risks.len(), 4, "{} risk list", profile.slug);
        }
    }
}
