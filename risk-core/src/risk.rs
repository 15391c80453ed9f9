use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Lowest score the classifier can produce.
pub const SCORE_MIN: u8 = 45;
/// Highest score the classifier can produce.
pub const SCORE_MAX: u8 = 95;

/// Risk classification for one monitored scene.
/// Ordered by increasing severity, for display styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Output of the mock classifier.
///
/// Invariants: `score` lies in `[SCORE_MIN, SCORE_MAX]`, `level` is
/// `level_for_score(score)`, and `description` is the fixed per-level text
/// from [`base_description`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub level: RiskLevel,
    pub score: u8,
    pub description: String,
}

/// Map a score onto its risk level via the fixed thresholds.
pub fn level_for_score(score: u8) -> RiskLevel {
    if score >= 75 {
        RiskLevel::High
    } else if score >= 60 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Language-neutral base description for a level. Localized variants live in
/// the locale tables and are selected by the presentation layer.
pub fn base_description(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "A forklift is operating in a warehouse aisle with pedestrians working in close \
             proximity. Insufficient separation between pedestrian and equipment traffic creates \
             a high risk of collision, particularly due to forklift blind spots and sudden \
             movement."
        }
        RiskLevel::Medium => {
            "Some risk signs are observed. It is not at the level of requiring an immediate stop, \
             but sufficient distance between personnel and equipment appears necessary. Please \
             quickly verify close-proximity operations and PPE compliance."
        }
        RiskLevel::Low => {
            "Clear high-risk indicators are limited. Maintain the current state, but continue \
             monitoring compliance with basic safety rules."
        }
    }
}

/// Deterministic mock classification of an input string.
///
/// No real content analysis happens here: the score is derived from a SHA-256
/// digest of the input bytes, so identical input always yields an identical
/// result, across runs and platforms. The function is total; empty input is
/// accepted and classifies like any other string (score 47, Low).
///
/// Callers that want a per-channel override must substitute it after this
/// returns; `classify` itself knows nothing about channels or overrides.
pub fn classify(input: &str) -> RiskResult {
    let digest = Sha256::digest(input.as_bytes());
    // First 4 digest bytes == first 8 hex characters of the hex digest.
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let score = SCORE_MIN + (prefix % 51) as u8;
    let level = level_for_score(score);

    RiskResult {
        level,
        score,
        description: base_description(level).to_string(),
    }
}
