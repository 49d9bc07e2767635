//! Variant rendering.
//!
//! Both variants take the same `ScoreRecord`; only the markup and the
//! outbound link parameters differ. Brand text is HTML-escaped and every
//! attribute value is attribute-escaped, so hostile brand strings are
//! displayed, not executed.

use html_escape::{encode_double_quoted_attribute, encode_text};
use trustable_core::ScoreRecord;

use crate::config::{Variant, WidgetConfigError};
use crate::host::MarkerElement;

const LOGO_SVG: &str = r#"<svg class="trustable-widget-logo" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5"/></svg>"#;

const TITLE: &str = "Trustable Score";

/// Renders score records into mount points. Bound to the operator site
/// that every outbound link points at.
#[derive(Debug, Clone)]
pub struct Renderer {
    site_url: String,
}

impl Renderer {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self { site_url: site_url.into() }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// "Powered by" link target.
    pub fn attribution_url(&self) -> String {
        self.site_url.clone()
    }

    /// Call-to-action link on the full card.
    pub fn cta_url(&self) -> String {
        self.site_link("ref=widget")
    }

    /// Badge link, carrying the brand for attribution.
    pub fn badge_url(&self, brand: &str) -> String {
        self.site_link(&format!("brand={}&ref=badge", urlencoding::encode(brand)))
    }

    /// Site URL with `query` appended to any query it already has, ahead of
    /// a fragment.
    fn site_link(&self, query: &str) -> String {
        let (base, fragment) = match self.site_url.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (self.site_url.as_str(), None),
        };
        let separator = if base.ends_with('?') || base.ends_with('&') {
            ""
        } else if base.contains('?') {
            "&"
        } else {
            "?"
        };

        let mut link = format!("{}{}{}", base, separator, query);
        if let Some(fragment) = fragment {
            link.push('#');
            link.push_str(fragment);
        }
        link
    }

    /// Replace the target's content with the requested variant.
    pub fn render<T: MarkerElement + ?Sized>(&self, target: &mut T, record: &ScoreRecord, variant: Variant) {
        target.set_inner_html(self.render_html(record, variant));
    }

    pub fn render_html(&self, record: &ScoreRecord, variant: Variant) -> String {
        match variant {
            Variant::Full => self.full_card(record),
            Variant::Badge => self.badge(record),
        }
    }

    /// Transient state shown while a lookup is in flight.
    pub fn render_loading<T: MarkerElement + ?Sized>(&self, target: &mut T) {
        target.set_inner_html(
            r#"<div class="trustable-widget trustable-widget-loading">Loading...</div>"#.to_string(),
        );
    }

    /// Inline error shown in place of a misconfigured widget.
    pub fn render_config_error<T: MarkerElement + ?Sized>(&self, target: &mut T, error: &WidgetConfigError) {
        target.set_inner_html(format!(
            r#"<div class="trustable-widget trustable-widget-error">{}</div>"#,
            encode_text(&error.to_string())
        ));
    }

    fn full_card(&self, record: &ScoreRecord) -> String {
        let score = record.score();
        format!(
            concat!(
                r#"<div class="trustable-widget">"#,
                r#"<div class="trustable-widget-header">{logo}<span class="trustable-widget-title">{title}</span></div>"#,
                r#"<div class="trustable-widget-brand">{brand}</div>"#,
                r#"<div class="trustable-widget-score">{score}</div>"#,
                r#"<div class="trustable-widget-rating">{rating} AI Visibility</div>"#,
                r#"<div class="trustable-widget-meter"><div class="trustable-widget-meter-fill" style="width: {score}%"></div></div>"#,
                r#"<div class="trustable-widget-footer">"#,
                r#"<a href="{attribution}" target="_blank" class="trustable-widget-link">Powered by Trustable</a>"#,
                r#"<a href="{cta}" target="_blank" class="trustable-widget-cta">Get Your Score</a>"#,
                r#"</div>"#,
                r#"</div>"#,
            ),
            logo = LOGO_SVG,
            title = TITLE,
            brand = encode_text(record.brand()),
            score = score,
            rating = record.rating().label(),
            attribution = encode_double_quoted_attribute(&self.attribution_url()),
            cta = encode_double_quoted_attribute(&self.cta_url()),
        )
    }

    fn badge(&self, record: &ScoreRecord) -> String {
        format!(
            concat!(
                r#"<a href="{href}" target="_blank" class="trustable-widget-minimal">"#,
                r#"<span class="trustable-widget-minimal-score">{score}</span>"#,
                r#"<span class="trustable-widget-minimal-label">{title}</span>"#,
                r#"</a>"#,
            ),
            href = encode_double_quoted_attribute(&self.badge_url(record.brand())),
            score = record.score(),
            title = TITLE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use trustable_core::Brand;

    fn renderer() -> Renderer {
        Renderer::new("https://trustablelabs.com")
    }

    fn record(brand: &str, score: u8) -> ScoreRecord {
        ScoreRecord::new(Brand::new(brand).unwrap(), score)
    }

    #[test]
    fn test_full_card_contents() {
        let html = renderer().render_html(&record("Acme", 73), Variant::Full);
        assert!(html.contains(r#"<div class="trustable-widget-brand">Acme</div>"#));
        assert!(html.contains(r#"<div class="trustable-widget-score">73</div>"#));
        assert!(html.contains("Good AI Visibility"));
        assert!(html.contains("width: 73%"));
        assert!(html.contains(r#"href="https://trustablelabs.com" target="_blank""#));
        assert!(html.contains(r#"href="https://trustablelabs.com?ref=widget""#));
    }

    #[test]
    fn test_full_card_escapes_brand() {
        let html = renderer().render_html(
            &record("<script>alert('x')</script>", 10),
            Variant::Full,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Minimal AI Visibility"));
    }

    #[test]
    fn test_badge_link_encodes_brand() {
        let html = renderer().render_html(&record("Acme & Co", 50), Variant::Badge);
        assert!(html.contains("brand=Acme%20%26%20Co"), "{}", html);
        assert!(!html.contains("Acme & Co"));
        assert!(html.contains("ref=badge"));
        assert!(html.contains(r#"<span class="trustable-widget-minimal-score">50</span>"#));
        assert!(html.contains("Trustable Score"));
    }

    #[test]
    fn test_badge_url() {
        assert_eq!(
            renderer().badge_url("Acme & Co"),
            "https://trustablelabs.com?brand=Acme%20%26%20Co&ref=badge"
        );
    }

    #[test]
    fn test_links_extend_existing_query() {
        let r = Renderer::new("https://trustablelabs.com/?utm=x");
        assert_eq!(r.cta_url(), "https://trustablelabs.com/?utm=x&ref=widget");
        assert_eq!(
            r.badge_url("Acme"),
            "https://trustablelabs.com/?utm=x&brand=Acme&ref=badge"
        );
        assert_eq!(r.attribution_url(), "https://trustablelabs.com/?utm=x");

        let html = r.render_html(&record("Acme", 60), Variant::Full);
        assert!(!html.contains("?utm=x?"), "{}", html);
    }

    #[test]
    fn test_links_keep_fragment_last() {
        let r = Renderer::new("https://trustablelabs.com/pricing#top");
        assert_eq!(r.cta_url(), "https://trustablelabs.com/pricing?ref=widget#top");

        let r = Renderer::new("https://trustablelabs.com/?");
        assert_eq!(r.cta_url(), "https://trustablelabs.com/?ref=widget");
    }

    #[test]
    fn test_variants_share_data() {
        let shared = record("Acme", 88);
        let full = renderer().render_html(&shared, Variant::Full);
        let badge = renderer().render_html(&shared, Variant::Badge);
        assert!(full.contains(">88<"));
        assert!(badge.contains(">88<"));
    }

    #[test]
    fn test_render_replaces_content() {
        let mut el = Element::new("div");
        let r = renderer();
        r.render_loading(&mut el);
        assert!(el.inner_html().contains("Loading..."));
        r.render(&mut el, &record("Acme", 42), Variant::Badge);
        assert!(!el.inner_html().contains("Loading..."));
        assert!(el.inner_html().contains(">42<"));
    }

    #[test]
    fn test_config_error_message() {
        let mut el = Element::new("div");
        renderer().render_config_error(&mut el, &WidgetConfigError::MissingBrand);
        assert!(el.inner_html().contains("trustable-widget-error"));
        assert!(el.inner_html().contains("Missing data-brand attribute"));
    }
}
