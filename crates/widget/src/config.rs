use trustable_core::Brand;

use crate::host::{attr, MarkerElement};

/// Visual presentation of a score record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Full card with meter and links
    #[default]
    Full,
    /// Compact inline badge
    Badge,
}

impl Variant {
    /// Permissive parse of a `data-variant` value: only `"badge"` selects
    /// the badge, anything else (including absent) is the full card.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("badge") => Variant::Badge,
            _ => Variant::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Badge => "badge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetConfigError {
    #[error("Missing data-brand attribute")]
    MissingBrand,
}

/// Per-marker configuration read from element attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub brand: Brand,
    pub variant: Variant,
    pub credential: Option<String>,
}

impl WidgetConfig {
    pub fn from_element<E: MarkerElement + ?Sized>(element: &E) -> Result<Self, WidgetConfigError> {
        let brand = element
            .attribute(attr::BRAND)
            .and_then(|b| Brand::new(b).ok())
            .ok_or(WidgetConfigError::MissingBrand)?;

        let variant = Variant::from_attribute(element.attribute(attr::VARIANT).as_deref());
        let credential = element.attribute(attr::API_KEY).filter(|k| !k.is_empty());

        Ok(Self { brand, variant, credential })
    }
}
