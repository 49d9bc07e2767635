use std::fmt;

use serde::Serialize;

/// Coarse, ordinal classification of a score.
///
/// Variants are declared lowest-first so the derived `Ord` matches the
/// tier ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    Minimal,
    Low,
    Moderate,
    Good,
    Excellent,
}

/// Inclusive lower bounds, highest tier first. First match wins.
const THRESHOLDS: [(u8, Rating); 4] = [
    (80, Rating::Excellent),
    (60, Rating::Good),
    (40, Rating::Moderate),
    (20, Rating::Low),
];

impl Rating {
    /// All tiers, lowest first.
    pub const ALL: [Rating; 5] = [
        Rating::Minimal,
        Rating::Low,
        Rating::Moderate,
        Rating::Good,
        Rating::Excellent,
    ];

    /// Classify a score. Callers clamp to `0..=100` upstream; anything
    /// above 100 still lands in `Excellent`.
    pub fn classify(score: u8) -> Self {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::Minimal)
    }

    /// Display label, as shown on the full card.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Minimal => "Minimal",
            Rating::Low => "Low",
            Rating::Moderate => "Moderate",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-function form of [`Rating::classify`].
pub fn classify(score: u8) -> Rating {
    Rating::classify(score)
}
