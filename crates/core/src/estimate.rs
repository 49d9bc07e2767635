//! Local score estimate from observed web-presence signals.
//!
//! Used when no authoritative remote score is available. Every signal
//! contributes independently; the sum is clamped to `0..=100`.

use serde::{Deserialize, Serialize};

use crate::record::MAX_SCORE;

/// Starting point before any bonus.
pub const BASE_SCORE: i32 = 20;

const PLATFORM_CRITICAL_MASS: u32 = 4;
const PLATFORM_CRITICAL_MASS_BONUS: i32 = 25;
const PLATFORM_MIN_COUNT: u32 = 2;
const PLATFORM_PER_LISTING: i32 = 5;

const WIKIDATA_BONUS: i32 = 10;
const GOOGLE_BUSINESS_BONUS: i32 = 8;
const SCHEMA_MARKUP_BONUS: i32 = 10;
const COMPARISON_CONTENT_BONUS: i32 = 15;

const FRESH_MONTHS: u32 = 6;
const FRESH_BONUS: i32 = 12;
const RECENT_MONTHS: u32 = 12;
const RECENT_BONUS: i32 = 8;

/// Observed facts about a brand's web presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignalBundle {
    /// Platforms where the brand is listed
    pub platform_count: u32,
    pub has_wikidata: bool,
    pub has_google_business: bool,
    pub has_schema_markup: bool,
    /// Months since the last major content update
    pub content_age: u32,
    pub has_comparison_content: bool,
}

/// Bonus for listing platforms. Reaching critical mass earns a flat bonus
/// instead of continuing the per-listing rate.
pub fn platform_bonus(platform_count: u32) -> i32 {
    if platform_count >= PLATFORM_CRITICAL_MASS {
        PLATFORM_CRITICAL_MASS_BONUS
    } else if platform_count >= PLATFORM_MIN_COUNT {
        PLATFORM_PER_LISTING * platform_count as i32
    } else {
        0
    }
}

/// Bonus for content freshness. Decays in two steps.
pub fn freshness_bonus(content_age: u32) -> i32 {
    if content_age <= FRESH_MONTHS {
        FRESH_BONUS
    } else if content_age <= RECENT_MONTHS {
        RECENT_BONUS
    } else {
        0
    }
}

fn flag(on: bool, bonus: i32) -> i32 {
    if on { bonus } else { 0 }
}

/// Estimate a score in `0..=100` from a signal bundle.
pub fn estimate(signals: &SignalBundle) -> u8 {
    let total = BASE_SCORE
        + platform_bonus(signals.platform_count)
        + flag(signals.has_wikidata, WIKIDATA_BONUS)
        + flag(signals.has_google_business, GOOGLE_BUSINESS_BONUS)
        + flag(signals.has_schema_markup, SCHEMA_MARKUP_BONUS)
        + freshness_bonus(signals.content_age)
        + flag(signals.has_comparison_content, COMPARISON_CONTENT_BONUS);

    total.clamp(0, MAX_SCORE as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All booleans false, content stale enough to earn nothing.
    fn bare() -> SignalBundle {
        SignalBundle {
            content_age: 24,
            ..SignalBundle::default()
        }
    }

    #[test]
    fn test_bare_bundle_is_base() {
        assert_eq!(estimate(&bare()), 20);
    }

    #[test]
    fn test_platform_bonus_steps() {
        let expected = [0, 0, 10, 15, 25, 25];
        for (count, bonus) in expected.iter().enumerate() {
            let signals = SignalBundle {
                platform_count: count as u32,
                ..bare()
            };
            assert_eq!(platform_bonus(count as u32), *bonus);
            assert_eq!(estimate(&signals) as i32, 20 + bonus, "platform_count={}", count);
        }
    }

    #[test]
    fn test_freshness_two_step_decay() {
        assert_eq!(freshness_bonus(0), 12);
        assert_eq!(freshness_bonus(6), 12);
        assert_eq!(freshness_bonus(7), 8);
        assert_eq!(freshness_bonus(12), 8);
        assert_eq!(freshness_bonus(13), 0);
    }

    #[test]
    fn test_default_bundle_counts_as_fresh() {
        // content_age 0 means "updated this month"
        assert_eq!(estimate(&SignalBundle::default()), 32);
    }

    #[test]
    fn test_individual_flags() {
        let wikidata = SignalBundle { has_wikidata: true, ..bare() };
        let google = SignalBundle { has_google_business: true, ..bare() };
        let schema = SignalBundle { has_schema_markup: true, ..bare() };
        let comparison = SignalBundle { has_comparison_content: true, ..bare() };
        assert_eq!(estimate(&wikidata), 30);
        assert_eq!(estimate(&google), 28);
        assert_eq!(estimate(&schema), 30);
        assert_eq!(estimate(&comparison), 35);
    }

    #[test]
    fn test_everything_maximal_hits_ceiling() {
        let signals = SignalBundle {
            platform_count: 12,
            has_wikidata: true,
            has_google_business: true,
            has_schema_markup: true,
            content_age: 1,
            has_comparison_content: true,
        };
        // 20 + 25 + 10 + 8 + 10 + 12 + 15 = 100
        assert_eq!(estimate(&signals), 100);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"platformCount":3,"hasWikidata":true,"contentAge":9}"#;
        let signals: SignalBundle = serde_json::from_str(json).unwrap();
        assert_eq!(signals.platform_count, 3);
        assert!(signals.has_wikidata);
        assert!(!signals.has_google_business);
        // 20 + 15 + 10 + 8
        assert_eq!(estimate(&signals), 53);
    }
}
