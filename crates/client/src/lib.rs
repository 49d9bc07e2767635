//! Score API client and resolver.
//!
//! `ScoreClient` is the wire contract: one bearer-authenticated GET per
//! lookup, typed errors. `ScoreResolver` sits on top and turns every
//! outcome into a renderable `ScoreRecord`.
//!
//! No retries. No backoff. No caching.

mod client;
mod resolver;

pub use client::{normalize_score, ScoreClient, ScoreError, ScoreResponse};
pub use resolver::ScoreResolver;
