//! ABCD mole-risk scoring: four binary indicator checks over a free-text
//! description (asymmetry, border, color, diameter), summed into a 0-4 score.

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

static ASYMMETRY_INDICATORS: &[&str] = &[
    "asymmetric",
    "asymmetrical",
    "uneven shape",
    "irregular shape",
    "one half",
    "lopsided",
];

static BORDER_INDICATORS: &[&str] = &[
    "irregular border",
    "jagged",
    "notched",
    "blurred edge",
    "ragged",
    "poorly defined",
];

static COLOR_INDICATORS: &[&str] = &[
    "multiple colors",
    "color variation",
    "different colors",
    "black",
    "dark brown",
    "blue",
    "varied color",
    "uneven color",
];

static DIAMETER_INDICATORS: &[&str] = &[
    "larger than 6mm",
    "bigger than a pencil eraser",
    "large",
    "growing",
    "increased in size",
    "expanding",
];

/// The color criterion needs this many distinct indicator hits; the other
/// three criteria need one.
const COLOR_MIN_HITS: usize = 2;

/// Result of an ABCD assessment. Each criterion is 0 or 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    pub asymmetry: u8,
    pub border: u8,
    pub color: u8,
    pub diameter: u8,
    /// Sum of the four criteria, 0-4.
    pub total: u8,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Scan a mole description for the four ABCD criteria.
pub fn assess(description: &str) -> RiskScore {
    let lower = description.to_lowercase();

    let asymmetry = criterion_bit(&lower, ASYMMETRY_INDICATORS, 1);
    let border = criterion_bit(&lower, BORDER_INDICATORS, 1);
    let color = criterion_bit(&lower, COLOR_INDICATORS, COLOR_MIN_HITS);
    let diameter = criterion_bit(&lower, DIAMETER_INDICATORS, 1);

    let total = asymmetry + border + color + diameter;
    let risk_level = risk_level_for(total);

    RiskScore {
        asymmetry,
        border,
        color,
        diameter,
        total,
        risk_level,
        recommendations: recommendations_for(risk_level)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

fn criterion_bit(description_lower: &str, indicators: &[&str], min_hits: usize) -> u8 {
    let hits = indicators
        .iter()
        .filter(|i| description_lower.contains(**i))
        .count();
    u8::from(hits >= min_hits)
}

/// Risk level is a pure, monotonic function of the total.
pub fn risk_level_for(total: u8) -> RiskLevel {
    match total {
        3.. => RiskLevel::High,
        2 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// Fixed three-item guidance per risk level, escalating in urgency.
pub fn recommendations_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => &[
            "Professional evaluation is strongly advised as soon as possible",
            "Ask a dermatologist about a full skin examination",
            "Photograph the area to document any further change",
        ],
        RiskLevel::Medium => &[
            "Schedule a skin check with a healthcare provider",
            "Monitor the area monthly for changes in size, shape, or color",
            "Protect the area from sun exposure",
        ],
        RiskLevel::Low => &[
            "Continue routine skin self-checks",
            "Note any future change in size, shape, or color",
            "Apply sun protection when outdoors",
        ],
    }
}
