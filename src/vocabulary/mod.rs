//! Symptom vocabulary normalization and fuzzy matching.
//!
//! Free-text symptom phrases are canonicalized to lowercase underscore tokens
//! and resolved against the vocabulary: exact membership first, then a
//! permissive fuzzy pass (substring either way, or character-set Jaccard
//! similarity above 0.8). Character-set Jaccard is a coarse heuristic chosen
//! over edit distance; it accepts false positives on short tokens.

mod synonyms;

use std::collections::BTreeSet;

pub use synonyms::{SYMPTOM_VOCABULARY, SYNONYMS};

/// Similarity threshold for the fuzzy character-set pass.
const JACCARD_THRESHOLD: f64 = 0.8;

/// Canonicalize a raw symptom phrase to a vocabulary-shaped token.
///
/// Lowercases, trims, joins words with underscores, then applies the synonym
/// table. Unmapped tokens pass through unchanged.
pub fn normalize(raw: &str) -> String {
    let token = raw
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_");

    match SYNONYMS.get(token.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => token,
    }
}

/// Resolve raw input tokens against a vocabulary.
///
/// Per token: exact membership wins; otherwise the first vocabulary entry
/// where either string contains the other, or where character-set Jaccard
/// similarity exceeds the threshold. Returns a deduplicated set; empty input
/// yields an empty set.
pub fn match_tokens(tokens: &[String], vocabulary: &[&str]) -> BTreeSet<String> {
    let mut matched = BTreeSet::new();

    for raw in tokens {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            continue;
        }

        if vocabulary.contains(&normalized.as_str()) {
            matched.insert(normalized);
            continue;
        }

        if let Some(entry) = vocabulary.iter().find(|v| {
            normalized.contains(*v)
                || v.contains(&normalized)
                || char_set_jaccard(&normalized, v) > JACCARD_THRESHOLD
        }) {
            matched.insert((*entry).to_string());
        }
    }

    matched
}

/// Jaccard similarity over the sets of unique characters in each string.
pub fn char_set_jaccard(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: BTreeSet<char> = a.chars().collect();
    let set_b: BTreeSet<char> = b.chars().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
