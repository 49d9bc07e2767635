use html_escape::encode_double_quoted_attribute;
use trustable_core::Brand;

use crate::config::Variant;
use crate::host::{attr, MARKER_ID};

/// Markup a site operator pastes into a page: the marker element followed
/// by the widget script tag. `data-variant` is omitted for the default
/// full card.
pub fn embed_snippet(brand: &Brand, variant: Variant, api_key: Option<&str>, script_url: &str) -> String {
    let mut marker = format!(
        "<div id=\"{}\" {}=\"{}\"",
        MARKER_ID,
        attr::BRAND,
        encode_double_quoted_attribute(brand.as_str())
    );
    if variant != Variant::Full {
        marker.push_str(&format!(" {}=\"{}\"", attr::VARIANT, variant.as_str()));
    }
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        marker.push_str(&format!(" {}=\"{}\"", attr::API_KEY, encode_double_quoted_attribute(key)));
    }
    marker.push_str("></div>");

    format!(
        "{}\n<script src=\"{}\"></script>\n",
        marker,
        encode_double_quoted_attribute(script_url)
    )
}
