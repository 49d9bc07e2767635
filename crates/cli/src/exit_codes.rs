//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract: scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | config / output  | Settings and output file codes           |
//! | 40-49   | score            | Remote score lookup codes (--strict)     |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use trustable_client::ScoreError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Config / output (3-9)
// =============================================================================

/// Settings failed validation (bad endpoint URL).
pub const EXIT_CONFIG_INVALID: u8 = 3;

/// Could not write output file.
pub const EXIT_IO: u8 = 4;

// =============================================================================
// Score (40-49), only reported by `score --strict`
// =============================================================================

/// No API key from --api-key or TRUSTABLE_API_KEY.
pub const EXIT_SCORE_NOT_AUTH: u8 = 40;

/// Transport failure reaching the score API.
pub const EXIT_SCORE_NETWORK: u8 = 41;

/// Score API answered with a non-success status.
pub const EXIT_SCORE_HTTP: u8 = 42;

/// Score API body was not JSON or lacked `trustableScore`.
pub const EXIT_SCORE_PARSE: u8 = 43;

/// Map a score lookup error to its exit code.
pub fn score_exit_code(err: &ScoreError) -> u8 {
    match err {
        ScoreError::MissingCredential => EXIT_SCORE_NOT_AUTH,
        ScoreError::Client(_) => EXIT_ERROR,
        ScoreError::Network(_) => EXIT_SCORE_NETWORK,
        ScoreError::Http(_, _) => EXIT_SCORE_HTTP,
        ScoreError::Parse(_) => EXIT_SCORE_PARSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_codes_are_distinct() {
        let codes = [
            score_exit_code(&ScoreError::MissingCredential),
            score_exit_code(&ScoreError::Network("x".into())),
            score_exit_code(&ScoreError::Http(500, String::new())),
            score_exit_code(&ScoreError::Parse("x".into())),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert!((40..50).contains(a));
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
