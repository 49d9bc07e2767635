//! API key resolution: flag > env > none.
//!
//! The key is an opaque bearer credential. It is never written to the
//! settings file.

pub const API_KEY_ENV: &str = "TRUSTABLE_API_KEY";

/// Resolve the API key from an explicit flag, then `TRUSTABLE_API_KEY`.
pub fn resolve_api_key(flag: Option<&str>) -> Option<String> {
    resolve_api_key_with(flag, |key| std::env::var(key).ok())
}

/// Same as [`resolve_api_key`] with an injectable environment lookup.
/// Empty or whitespace-only values count as absent.
pub fn resolve_api_key_with<F>(flag: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    flag.map(str::to_string)
        .filter(|k| !k.trim().is_empty())
        .or_else(|| lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key: &str| (key == API_KEY_ENV).then(|| value.to_string())
    }

    #[test]
    fn test_flag_wins_over_env() {
        let key = resolve_api_key_with(Some("flag-key"), env_with("env-key"));
        assert_eq!(key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let key = resolve_api_key_with(None, env_with("env-key"));
        assert_eq!(key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_empty_values_are_absent() {
        assert_eq!(resolve_api_key_with(Some(""), env_with("")), None);
        assert_eq!(resolve_api_key_with(Some("  "), |_| None), None);
        let key = resolve_api_key_with(Some(""), env_with("env-key"));
        assert_eq!(key.as_deref(), Some("env-key"));
    }
}
