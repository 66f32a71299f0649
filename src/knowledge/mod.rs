//! Static knowledge tables: disease rules, skin-condition profiles, and
//! reference information. Loaded once, never mutated, safe for concurrent
//! read-only access.

pub mod conditions;
pub mod diseases;

pub use conditions::{
    condition_keywords, condition_profile, ConditionProfile, ALWAYS_HIGH_SEVERITY,
    CONDITION_KEYWORDS, CONDITION_PROFILES, MODERATE_INDICATORS, SEVERE_INDICATORS,
};
pub use diseases::{disease_info, DatasetRecord, DiseaseInfo, DiseaseRule, DISEASE_RULES};
