//! Content safety: filters outward-facing recommendation text and guards
//! generated prompt/response text. Every string list leaving the crate passes
//! through here first.

pub mod filter;
pub mod prompt_guard;

pub use filter::{filter_bundle, filter_recommendations, RESTRICTED_TERMS};
pub use prompt_guard::{apply_restrictions, sanitize_generated, RESTRICTION_BLOCK};
