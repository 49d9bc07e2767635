use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("brand must not be empty")]
pub struct EmptyBrand;

/// Non-empty brand name as written in `data-brand`.
///
/// Construct with [`Brand::new`] or `parse()`; an empty string is rejected,
/// so every record and every score lookup carries a usable brand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Brand(String);

impl Brand {
    pub fn new(name: impl Into<String>) -> Result<Self, EmptyBrand> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmptyBrand);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Brand {
    type Err = EmptyBrand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Brand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_brand_rejected() {
        assert_eq!(Brand::new(""), Err(EmptyBrand));
        assert_eq!("".parse::<Brand>(), Err(EmptyBrand));
    }

    #[test]
    fn test_name_kept_verbatim() {
        let brand: Brand = "Acme & Co".parse().unwrap();
        assert_eq!(brand.as_str(), "Acme & Co");
        assert_eq!(brand.to_string(), "Acme & Co");
        assert_eq!(Brand::new(" ").unwrap().as_str(), " ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_value(Brand::new("Acme").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!("Acme"));
    }
}
