//! Skin-image analysis: description scoring, ABCD mole-risk assessment, and
//! multi-source score fusion.

pub mod abcd;
pub mod description;
pub mod fusion;

pub use abcd::{assess as assess_abcd, RiskScore};
pub use description::{analyze_image_description, determine_severity};
pub use fusion::{combine_image_and_symptoms, combine_predictions, fuse};
