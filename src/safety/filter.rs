use std::sync::LazyLock;

use regex::Regex;

use crate::models::RecommendationBundle;

/// Substrings that disqualify a recommendation line entirely.
///
/// Substring matching is the mechanism: "mg" inside an unrelated word will
/// drop the line. That over-blocking is accepted for outward-facing health
/// guidance.
pub static RESTRICTED_TERMS: &[&str] = &[
    "medication",
    "prescribe",
    "dosage",
    "mg",
    "pills",
    "tablets",
    "antibiotics",
    "steroids",
    "diagnosis",
    "definitely",
    "certainly",
];

/// A leading-imperative rewrite applied to surviving lines.
struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

static REWRITE_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule {
            pattern: Regex::new(r"^\s*Take\s+").expect("Invalid rewrite pattern"),
            replacement: "Consider discussing with healthcare provider about ",
        },
        RewriteRule {
            pattern: Regex::new(r"^\s*Use\s+").expect("Invalid rewrite pattern"),
            replacement: "Ask healthcare provider about ",
        },
    ]
});

/// Filter a recommendation list: drop lines containing restricted terms,
/// rewrite leading imperatives on the rest.
pub fn filter_recommendations(recommendations: &[String]) -> Vec<String> {
    let mut filtered = Vec::with_capacity(recommendations.len());

    for line in recommendations {
        let lower = line.to_lowercase();
        if let Some(term) = RESTRICTED_TERMS.iter().find(|t| lower.contains(**t)) {
            tracing::debug!(term = %term, "Dropped restricted recommendation line");
            continue;
        }
        filtered.push(soften_imperative(line));
    }

    filtered
}

/// Filter every list in a recommendation bundle.
pub fn filter_bundle(bundle: &RecommendationBundle) -> RecommendationBundle {
    RecommendationBundle {
        urgency: bundle.urgency,
        actions: filter_recommendations(&bundle.actions),
        self_care: filter_recommendations(&bundle.self_care),
        warning_signs: filter_recommendations(&bundle.warning_signs),
    }
}

fn soften_imperative(line: &str) -> String {
    for rule in REWRITE_RULES.iter() {
        if rule.pattern.is_match(line) {
            return rule.pattern.replace(line, rule.replacement).to_string();
        }
    }
    line.to_string()
}
