use serde::Serialize;

use crate::brand::Brand;
use crate::rating::Rating;

/// Score shown when no authoritative remote score is available.
pub const DEFAULT_SCORE: u8 = 50;

/// Upper bound of the score range.
pub const MAX_SCORE: u8 = 100;

/// Uniform result handed from the resolver to the renderer.
///
/// Fields are private: the only way to build one is [`ScoreRecord::new`],
/// which derives `rating` from `score`, so the two never disagree. The brand
/// is a [`Brand`] and therefore never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    brand: Brand,
    score: u8,
    rating: Rating,
}

impl ScoreRecord {
    /// Build a record. Scores above [`MAX_SCORE`] are clamped.
    pub fn new(brand: Brand, score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            brand,
            score,
            rating: Rating::classify(score),
        }
    }

    /// Record carrying [`DEFAULT_SCORE`].
    pub fn fallback(brand: Brand) -> Self {
        Self::new(brand, DEFAULT_SCORE)
    }

    pub fn brand(&self) -> &str {
        self.brand.as_str()
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}
