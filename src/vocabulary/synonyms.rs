use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical symptom vocabulary. Base tokens come before compound variants so
/// fuzzy lookups resolve to the plainest form first.
pub static SYMPTOM_VOCABULARY: &[&str] = &[
    "fever",
    "high_fever",
    "mild_fever",
    "chills",
    "headache",
    "severe_headache",
    "cough",
    "sore_throat",
    "runny_nose",
    "congestion",
    "sneezing",
    "fatigue",
    "nausea",
    "vomiting",
    "diarrhoea",
    "abdominal_pain",
    "severe_abdominal_pain",
    "stomach_pain",
    "chest_pain",
    "breathlessness",
    "dizziness",
    "muscle_pain",
    "joint_pain",
    "back_pain",
    "neck_pain",
    "body_aches",
    "skin_rash",
    "itching",
    "swelling",
    "watering_from_eyes",
    "visual_disturbances",
    "sensitivity_to_light",
    "burning_micturition",
    "frequent_urination",
];

/// Common phrasing variants mapped to their canonical token.
pub static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("stuffy_nose", "congestion"),
        ("blocked_nose", "congestion"),
        ("stomach_ache", "stomach_pain"),
        ("belly_pain", "abdominal_pain"),
        ("difficulty_breathing", "breathlessness"),
        ("shortness_of_breath", "breathlessness"),
        ("high_temperature", "high_fever"),
        ("temperature", "fever"),
        ("tiredness", "fatigue"),
        ("exhaustion", "fatigue"),
        ("throwing_up", "vomiting"),
        ("loose_stools", "diarrhoea"),
        ("loose_motions", "diarrhoea"),
        ("head_pain", "headache"),
        ("migraine", "headache"),
        ("back_ache", "back_pain"),
        ("neck_ache", "neck_pain"),
        ("joint_ache", "joint_pain"),
        ("muscle_ache", "muscle_pain"),
        ("body_pain", "muscle_pain"),
        ("skin_irritation", "skin_rash"),
        ("rash", "skin_rash"),
        ("scratching", "itching"),
        ("burning_sensation", "burning_micturition"),
    ])
});
