//! Host page boundary.
//!
//! The widget never walks a real DOM itself. A host supplies its elements
//! and a place to put page-level styles; the controller decides which
//! elements are markers.

/// Marker id convention: `<div id="trustable-score">`.
pub const MARKER_ID: &str = "trustable-score";

/// Marker class convention: `<div class="trustable-score">`.
pub const MARKER_CLASS: &str = "trustable-score";

/// Attribute names read from a marker element.
pub mod attr {
    pub const ID: &str = "id";
    pub const CLASS: &str = "class";
    pub const BRAND: &str = "data-brand";
    pub const VARIANT: &str = "data-variant";
    pub const API_KEY: &str = "data-api-key";
}

/// An element the widget can read configuration from and render into.
pub trait MarkerElement {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Replace the element's content.
    fn set_inner_html(&mut self, html: String);
}

impl<E: MarkerElement + ?Sized> MarkerElement for &mut E {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_inner_html(&mut self, html: String) {
        (**self).set_inner_html(html)
    }
}

/// A page hosting zero or more widget markers.
pub trait HostPage {
    type Element: MarkerElement;

    /// Candidate elements, in document order.
    fn elements(&self) -> Vec<Self::Element>;

    /// Whether a page-level style block with this id already exists.
    fn has_style(&self, id: &str) -> bool;

    fn inject_style(&mut self, id: &str, css: &str);
}

/// True when the element matches either marker convention.
pub fn is_marker<E: MarkerElement + ?Sized>(element: &E) -> bool {
    if element.attribute(attr::ID).as_deref() == Some(MARKER_ID) {
        return true;
    }
    element
        .attribute(attr::CLASS)
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == MARKER_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Stub(HashMap<&'static str, &'static str>);

    impl MarkerElement for Stub {
        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }

        fn set_inner_html(&mut self, _html: String) {}
    }

    fn stub(pairs: &[(&'static str, &'static str)]) -> Stub {
        Stub(pairs.iter().copied().collect())
    }

    #[test]
    fn test_marker_by_id() {
        assert!(is_marker(&stub(&[("id", "trustable-score")])));
        assert!(!is_marker(&stub(&[("id", "trustable-score-2")])));
    }

    #[test]
    fn test_marker_by_class() {
        assert!(is_marker(&stub(&[("class", "trustable-score")])));
        assert!(is_marker(&stub(&[("class", "sidebar  trustable-score wide")])));
        assert!(!is_marker(&stub(&[("class", "trustable-scores")])));
    }

    #[test]
    fn test_unmarked_element() {
        assert!(!is_marker(&stub(&[("data-brand", "Acme")])));
    }
}
