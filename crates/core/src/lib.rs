//! Core types for the Trustable score widget.
//!
//! Pure, synchronous pieces of the pipeline: the rating classifier, the
//! local estimator, and the score record handed from resolver to renderer.
//! No I/O lives here.

pub mod brand;
pub mod estimate;
pub mod rating;
pub mod record;

pub use brand::{Brand, EmptyBrand};
pub use estimate::{estimate, freshness_bonus, platform_bonus, SignalBundle, BASE_SCORE};
pub use rating::{classify, Rating};
pub use record::{ScoreRecord, DEFAULT_SCORE, MAX_SCORE};
