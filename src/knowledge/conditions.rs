use crate::models::enums::Urgency;

/// Static profile of one skin condition.
///
/// All phrase lists are lowercase; the image-description scorer matches them
/// as substrings against lowercased input.
#[derive(Debug, Clone, Copy)]
pub struct ConditionProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub common_locations: &'static [&'static str],
    pub visual_characteristics: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub severity_levels: &'static [&'static str],
    pub age_groups: &'static [&'static str],
    pub treatment_options: &'static [&'static str],
    pub urgency: Urgency,
}

/// The condition knowledge base. Read-only after process start; shared freely
/// across concurrent scoring calls.
pub static CONDITION_PROFILES: &[ConditionProfile] = &[
    ConditionProfile {
        name: "Eczema",
        description: "A chronic inflammatory skin condition causing dry, itchy, inflamed patches.",
        common_locations: &["hands", "elbows", "knees", "face", "neck"],
        visual_characteristics: &["red", "itchy", "dry", "scaling", "patches", "inflamed"],
        symptoms: &["itching", "dryness", "soreness"],
        severity_levels: &["mild", "moderate", "severe"],
        age_groups: &["children", "adults"],
        treatment_options: &[
            "Keep the skin moisturized",
            "Identify and avoid personal triggers",
            "Discuss flare management with a dermatologist",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Psoriasis",
        description: "An immune-mediated condition producing thickened, scaly plaques.",
        common_locations: &["elbows", "knees", "scalp", "lower back"],
        visual_characteristics: &["red", "scaling", "silvery", "plaques", "thick", "flaky"],
        symptoms: &["itching", "soreness", "cracking"],
        severity_levels: &["mild", "moderate", "severe"],
        age_groups: &["adults"],
        treatment_options: &[
            "Keep affected areas moisturized",
            "Track what makes flares better or worse",
            "Discuss long-term management with a dermatologist",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Acne",
        description: "Blocked and inflamed hair follicles producing pimples and comedones.",
        common_locations: &["face", "back", "chest", "shoulders"],
        visual_characteristics: &["pimples", "whiteheads", "blackheads", "bumps", "oily"],
        symptoms: &["tenderness", "itching"],
        severity_levels: &["mild", "moderate", "severe"],
        age_groups: &["adolescents", "adults"],
        treatment_options: &[
            "Wash the area gently twice daily",
            "Avoid picking or squeezing lesions",
            "Ask a dermatologist about persistent breakouts",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Rosacea",
        description: "A chronic condition causing facial flushing, visible vessels, and papules.",
        common_locations: &["face", "cheeks", "nose", "forehead"],
        visual_characteristics: &["flushing", "redness", "visible vessels", "papules", "thickened"],
        symptoms: &["burning", "stinging", "sensitivity"],
        severity_levels: &["mild", "moderate", "severe"],
        age_groups: &["adults"],
        treatment_options: &[
            "Note and avoid flushing triggers such as heat and spicy food",
            "Protect the face from sun exposure",
            "Discuss persistent redness with a dermatologist",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Contact_Dermatitis",
        description: "Localized skin inflammation triggered by an irritant or allergen.",
        common_locations: &["hands", "face", "arms", "wrists"],
        visual_characteristics: &["red", "itchy", "blisters", "rash", "swollen"],
        symptoms: &["itching", "burning", "stinging"],
        severity_levels: &["mild", "moderate"],
        age_groups: &["children", "adults"],
        treatment_options: &[
            "Rinse the area and avoid the suspected trigger",
            "Keep the area clean and dry",
            "Seek evaluation if the rash spreads or persists",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Fungal_Infection",
        description: "A superficial infection of the skin by dermatophytes or yeasts.",
        common_locations: &["feet", "groin", "nails", "scalp"],
        visual_characteristics: &["ring-shaped", "red", "scaling", "cracked", "itchy"],
        symptoms: &["itching", "burning", "peeling"],
        severity_levels: &["mild", "moderate"],
        age_groups: &["children", "adults"],
        treatment_options: &[
            "Keep the area clean and dry",
            "Avoid sharing towels or footwear",
            "Ask a healthcare provider about persistent patches",
        ],
        urgency: Urgency::Low,
    },
    ConditionProfile {
        name: "Hives",
        description: "Transient raised welts from a histamine response, often allergic.",
        common_locations: &["trunk", "arms", "legs", "face"],
        visual_characteristics: &["raised", "welts", "wheals", "itchy", "pale center"],
        symptoms: &["itching", "swelling", "burning"],
        severity_levels: &["mild", "moderate", "severe"],
        age_groups: &["children", "adults"],
        treatment_options: &[
            "Track recent foods, products, and exposures",
            "Apply a cool compress for comfort",
            "Seek care promptly if swelling affects the face or breathing",
        ],
        urgency: Urgency::Medium,
    },
    ConditionProfile {
        name: "Atypical_Mole",
        description: "A mole with irregular features that warrants monitoring for change.",
        common_locations: &["back", "trunk", "arms", "legs"],
        visual_characteristics: &["dark", "irregular", "asymmetric", "raised", "multiple colors"],
        symptoms: &["usually painless"],
        severity_levels: &["monitor", "evaluate"],
        age_groups: &["adults"],
        treatment_options: &[
            "Photograph the mole to track change over time",
            "Schedule a professional skin examination",
            "Protect the area from sun exposure",
        ],
        urgency: Urgency::Medium,
    },
    ConditionProfile {
        name: "Melanoma",
        description: "A serious skin cancer arising from pigment cells; early evaluation matters.",
        common_locations: &["back", "legs", "face", "arms"],
        visual_characteristics: &[
            "asymmetric",
            "irregular border",
            "color variation",
            "dark",
            "evolving",
            "larger than 6mm",
        ],
        symptoms: &["itching", "bleeding", "change in size"],
        severity_levels: &["serious"],
        age_groups: &["adults"],
        treatment_options: &[
            "Arrange a dermatologist evaluation without delay",
            "Do not wait for the lesion to change further",
            "Bring photos of the lesion history if available",
        ],
        urgency: Urgency::High,
    },
    ConditionProfile {
        name: "Diabetic_Foot_Ulcer",
        description: "An open wound on the foot associated with diabetes; high complication risk.",
        common_locations: &["feet", "toes", "heel", "sole"],
        visual_characteristics: &["open wound", "ulcer", "drainage", "surrounding redness", "callus"],
        symptoms: &["numbness", "drainage", "odor"],
        severity_levels: &["serious"],
        age_groups: &["adults"],
        treatment_options: &[
            "Arrange prompt evaluation by a healthcare provider",
            "Keep weight off the affected foot",
            "Keep the wound clean and covered until seen",
        ],
        urgency: Urgency::High,
    },
];

/// Condition-specific keyword groups: a description mentioning any keyword in
/// a group earns that condition a fixed confidence bonus (first match only).
pub static CONDITION_KEYWORDS: &[(&str, &[&str])] = &[
    ("Eczema", &["itchy", "dry skin", "eczema", "dermatitis"]),
    ("Psoriasis", &["silvery", "plaques", "psoriasis", "scaly"]),
    ("Acne", &["pimple", "acne", "breakout", "blackhead"]),
    ("Rosacea", &["flushing", "rosacea", "broken vessels"]),
    ("Contact_Dermatitis", &["blister", "contact", "allergic", "new soap"]),
    ("Fungal_Infection", &["ring", "fungal", "athlete", "between toes"]),
    ("Hives", &["hives", "welts", "wheals"]),
    ("Atypical_Mole", &["mole", "spot", "growth"]),
    ("Melanoma", &["melanoma", "changing mole", "new growth"]),
    ("Diabetic_Foot_Ulcer", &["ulcer", "diabetic", "foot wound", "non-healing"]),
];

/// Conditions whose severity is always high regardless of the description.
pub static ALWAYS_HIGH_SEVERITY: &[&str] = &["Melanoma", "Diabetic_Foot_Ulcer"];

/// Description phrases that mark a presentation as severe.
pub static SEVERE_INDICATORS: &[&str] = &[
    "bleeding",
    "rapidly growing",
    "spreading quickly",
    "severe pain",
    "pus",
    "open wound",
    "black",
    "fever",
];

/// Description phrases that mark a presentation as moderate.
pub static MODERATE_INDICATORS: &[&str] = &[
    "painful",
    "swelling",
    "blistering",
    "cracked",
    "burning",
    "oozing",
];

/// Look up a condition profile by exact name.
pub fn condition_profile(name: &str) -> Option<&'static ConditionProfile> {
    CONDITION_PROFILES.iter().find(|p| p.name == name)
}

/// Keyword group for a condition, if one is defined.
pub fn condition_keywords(name: &str) -> Option<&'static [&'static str]> {
    CONDITION_KEYWORDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, kw)| *kw)
}
